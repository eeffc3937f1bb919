//! Noyau — évaluation infixe à deux piles
//!
//! tokenize -> balayage gauche→droite (pile valeurs + pile opérateurs) -> résultat
//!
//! Les deux piles vivent le temps d’un appel : aucune donnée partagée entre évaluations.

use tracing::{debug, trace};

use super::erreur::{Cause, ErreurEval};
use super::jetons::{format_tokens, tokenize, Operateur, Tok};

/// Élément de la pile opérateurs : un opérateur ou une parenthèse ouvrante.
#[derive(Clone, Copy, Debug)]
enum Empile {
    Op(Operateur),
    LPar,
}

/// API publique : évalue une expression infixe (+ - * /, parenthèses, décimaux).
///
/// - "" => 0
/// - division par un diviseur exactement nul => `ErreurEval::DivisionParZero`
/// - tout le reste du mal-formé => `ErreurEval::ExpressionInvalide`
pub fn evaluer(expression: &str) -> Result<f64, ErreurEval> {
    if expression.is_empty() {
        return Ok(0.0);
    }

    let jetons = tokenize(expression)?;
    trace!(jetons = %format_tokens(&jetons), "jetons");

    let mut valeurs: Vec<f64> = Vec::new();
    let mut ops: Vec<Empile> = Vec::new();

    for tok in jetons {
        match tok {
            Tok::Num(v) => valeurs.push(v),

            Tok::LPar => ops.push(Empile::LPar),

            Tok::RPar => loop {
                match ops.pop() {
                    Some(Empile::LPar) => break,
                    Some(Empile::Op(op)) => appliquer_sommet(op, &mut valeurs)?,
                    None => return Err(Cause::ParentheseNonOuverte.into()),
                }
            },

            Tok::Op(entrant) => {
                // dépile tant que le sommet est un opérateur au moins aussi prioritaire
                // (gauche-associatif ; une parenthèse bloque toujours)
                while let Some(Empile::Op(sommet)) = ops.last().copied() {
                    if sommet.precedence() < entrant.precedence() {
                        break;
                    }
                    ops.pop();
                    appliquer_sommet(sommet, &mut valeurs)?;
                }
                ops.push(Empile::Op(entrant));
            }
        }
    }

    // vide la pile ops
    while let Some(e) = ops.pop() {
        match e {
            Empile::Op(op) => appliquer_sommet(op, &mut valeurs)?,
            Empile::LPar => return Err(Cause::ParentheseNonFermee.into()),
        }
    }

    let resultat = match valeurs.as_slice() {
        [v] => *v,
        [] => return Err(Cause::OperandeManquant.into()),
        reste => return Err(Cause::ValeursRestantes(reste.len()).into()),
    };

    debug!(expression, resultat, "évaluation");
    Ok(resultat)
}

/// Dépile b puis a, pousse `a op b`.
fn appliquer_sommet(op: Operateur, valeurs: &mut Vec<f64>) -> Result<(), ErreurEval> {
    let b = valeurs.pop().ok_or(Cause::OperandeManquant)?;
    let a = valeurs.pop().ok_or(Cause::OperandeManquant)?;
    valeurs.push(appliquer(op, a, b)?);
    Ok(())
}

/// `a op b` ; refuse la division par zéro plutôt que de produire ±inf / NaN.
pub fn appliquer(op: Operateur, a: f64, b: f64) -> Result<f64, ErreurEval> {
    Ok(match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            if b == 0.0 {
                return Err(ErreurEval::DivisionParZero);
            }
            a / b
        }
    })
}
