//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - erreur.rs  : ErreurEval (division par zéro / expression invalide)
//! - jetons.rs  : tokenisation (nombres décimaux, + - * /, parenthèses)
//! - eval.rs    : évaluation infixe à deux piles
//! - format.rs  : affichage du résultat

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::evaluer;
pub use format::format_resultat;
