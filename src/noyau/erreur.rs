// src/noyau/erreur.rs
//
// Erreurs du noyau.
// Deux genres seulement (division par zéro / expression invalide) ;
// la cause détaillée sert au journal et aux tests, jamais à l’affichage.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurEval {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("expression invalide : {0}")]
    ExpressionInvalide(Cause),
}

/// Détail d’une expression invalide.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Cause {
    #[error("caractère inattendu '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide \"{0}\"")]
    NombreInvalide(String),

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseNonOuverte,

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("opérande manquant")]
    OperandeManquant,

    #[error("{0} valeurs restantes au lieu d’une")]
    ValeursRestantes(usize),
}

impl From<Cause> for ErreurEval {
    fn from(c: Cause) -> Self {
        ErreurEval::ExpressionInvalide(c)
    }
}

impl ErreurEval {
    pub fn est_division_par_zero(&self) -> bool {
        matches!(self, ErreurEval::DivisionParZero)
    }
}
