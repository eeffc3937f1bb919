//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat) et appliquer
//! les touches. Aucune logique d’affichage ici ; l’évaluation est déléguée au noyau.
//!
//! Contrats :
//! - L’écran ne distingue pas les erreurs : toute erreur du noyau s’affiche "Erreur".
//! - Le genre exact de l’erreur part dans le journal (tracing).
//! - Un résultat non fini (ex. numéral géant => inf) est traité comme une erreur.

use tracing::{debug, info, warn};

use crate::noyau::{evaluer, format_resultat};
use crate::reglages::Reglages;

/// Texte affiché pour toute erreur d’évaluation.
pub const TEXTE_ERREUR: &str = "Erreur";

/// Résultat affiché au démarrage et après C.
const RESULTAT_INITIAL: &str = "0";

/// Glyphes de l’écran -> alphabet du noyau.
const GLYPHES: [(char, char); 2] = [('×', '*'), ('÷', '/')];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Chiffre, '.', opérateur ou parenthèse : inséré tel quel.
    Symbole(char),
    Effacer,
    RetourArriere,
    Pourcent,
    Egal,
}

impl Touche {
    /// Touche associée à une étiquette du pavé ("7", "×", "C", "⌫", "%", "=").
    pub fn depuis_etiquette(s: &str) -> Option<Self> {
        match s {
            "C" => Some(Touche::Effacer),
            "⌫" => Some(Touche::RetourArriere),
            "%" => Some(Touche::Pourcent),
            "=" => Some(Touche::Egal),
            _ => {
                let mut it = s.chars();
                match (it.next(), it.next()) {
                    (Some(c), None) if est_symbole(c) => Some(Touche::Symbole(c)),
                    _ => None,
                }
            }
        }
    }
}

/// Symboles insérables depuis le pavé ou le clavier.
pub fn est_symbole(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')' | '×' | '÷')
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur (avec glyphes d’écran) ---
    pub entree: String,

    // --- sortie ---
    pub resultat: String,

    // --- paramètres ---
    pub reglages: Reglages,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_reglages(Reglages::default())
    }
}

impl AppCalc {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            entree: String::new(),
            resultat: RESULTAT_INITIAL.to_string(),
            reglages,
        }
    }

    /// Ligne d’entrée telle qu’affichée ("0" si vide).
    pub fn entree_affichee(&self) -> &str {
        if self.entree.is_empty() {
            "0"
        } else {
            &self.entree
        }
    }

    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Symbole(c) => self.entree.push(c),
            Touche::Effacer => self.effacer(),
            Touche::RetourArriere => self.retour_arriere(),
            Touche::Pourcent => self.entree.push_str("/100"),
            Touche::Egal => self.egal(),
        }
    }

    /// C : entrée vide + résultat remis à "0".
    pub fn effacer(&mut self) {
        self.entree.clear();
        self.resultat = RESULTAT_INITIAL.to_string();
    }

    /// ⌫ : retire le dernier caractère (rien si vide).
    pub fn retour_arriere(&mut self) {
        self.entree.pop();
    }

    /// = : évalue l’entrée ; l’entrée reste affichée au-dessus du résultat.
    pub fn egal(&mut self) {
        let expr = normaliser(&self.entree);

        self.resultat = match evaluer(&expr) {
            Ok(v) if v.is_finite() => format_resultat(v, self.reglages.decimales),
            Ok(v) => {
                warn!(expression = %expr, valeur = v, "résultat non fini");
                TEXTE_ERREUR.to_string()
            }
            Err(e) if e.est_division_par_zero() => {
                info!(expression = %expr, "division par zéro");
                TEXTE_ERREUR.to_string()
            }
            Err(e) => {
                warn!(expression = %expr, erreur = %e, "évaluation refusée");
                TEXTE_ERREUR.to_string()
            }
        };

        debug!(resultat = %self.resultat, "affichage");
    }
}

/// Remplace les glyphes d’écran (×, ÷) par les opérateurs du noyau.
pub fn normaliser(entree: &str) -> String {
    entree
        .chars()
        .map(|c| {
            GLYPHES
                .iter()
                .find(|(g, _)| *g == c)
                .map_or(c, |(_, ascii)| *ascii)
        })
        .collect()
}
