// src/reglages.rs
//
// Réglages (fichier TOML optionnel)
// ---------------------------------
// Emplacement : <config_dir>/calculatrice-poche/reglages.toml
//
//   decimales = 4        # absent => écriture la plus courte
//   sombre = true
//   largeur = 380.0
//   hauteur = 680.0
//
// Fichier absent => défauts. Fichier illisible / invalide => avertissement + défauts.
// En wasm : pas de système de fichiers, toujours les défauts.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::noyau::format::DECIMALES_MAX;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    /// Décimales fixes du résultat ; `None` = écriture la plus courte.
    pub decimales: Option<usize>,
    pub sombre: bool,
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            decimales: None,
            sombre: true,
            largeur: 380.0,
            hauteur: 680.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture de {chemin:?} impossible : {source}")]
    Lecture {
        chemin: PathBuf,
        source: std::io::Error,
    },

    #[error("réglages invalides : {0}")]
    Toml(#[from] toml::de::Error),
}

impl Reglages {
    /// Charge les réglages utilisateur, sans jamais échouer.
    pub fn charger() -> Self {
        Self::charger_depuis(chemin_defaut().as_deref())
    }

    /// Pas de chemin ou fichier absent => défauts ; fichier fautif => avertissement + défauts.
    pub fn charger_depuis(chemin: Option<&Path>) -> Self {
        let Some(chemin) = chemin else {
            return Self::default();
        };
        if !chemin.exists() {
            return Self::default();
        }

        match Self::depuis_fichier(chemin) {
            Ok(r) => {
                info!(?chemin, "réglages chargés");
                r
            }
            Err(e) => {
                warn!("{e} ; réglages par défaut");
                Self::default()
            }
        }
    }

    pub fn depuis_fichier(chemin: &Path) -> Result<Self, ErreurReglages> {
        let texte = std::fs::read_to_string(chemin).map_err(|source| ErreurReglages::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        Self::depuis_toml(&texte)
    }

    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurReglages> {
        let r: Reglages = toml::from_str(texte)?;
        Ok(r.bornee())
    }

    /// Garde-fous : décimales bornées, fenêtre pas plus petite qu’un téléphone étroit.
    fn bornee(mut self) -> Self {
        self.decimales = self.decimales.map(|d| d.min(DECIMALES_MAX));
        self.largeur = self.largeur.max(240.0);
        self.hauteur = self.hauteur.max(400.0);
        self
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn chemin_defaut() -> Option<PathBuf> {
    const DOSSIER: &str = "calculatrice-poche";
    const FICHIER: &str = "reglages.toml";

    dirs::config_dir().map(|d| d.join(DOSSIER).join(FICHIER))
}

#[cfg(target_arch = "wasm32")]
fn chemin_defaut() -> Option<PathBuf> {
    None
}
