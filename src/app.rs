// src/app.rs
//
// Calculatrice de poche — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier physique : symboles tapés, Enter = "=", Backspace = "⌫", Escape = "C"

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::{est_symbole, Touche};

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for touche in touches_clavier(ctx) {
            self.appuyer(touche);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.fond()))
            .show(ctx, |ui| {
                self.ui(ui); // méthode publique (dans vue.rs)
            });
    }
}

/// Traduit les événements clavier de la frame en touches.
/// Pas de champ texte focusable : la calculatrice capte tout le clavier.
fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input(|i| {
        i.events
            .iter()
            .flat_map(|ev| match ev {
                egui::Event::Text(t) => t
                    .chars()
                    .filter_map(|c| match c {
                        '%' => Some(Touche::Pourcent),
                        '=' => Some(Touche::Egal),
                        c if est_symbole(c) => Some(Touche::Symbole(c)),
                        _ => None,
                    })
                    .collect::<Vec<_>>(),
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => vec![Touche::Egal],
                    egui::Key::Backspace => vec![Touche::RetourArriere],
                    egui::Key::Escape => vec![Touche::Effacer],
                    _ => Vec::new(),
                },
                _ => Vec::new(),
            })
            .collect()
    })
}
