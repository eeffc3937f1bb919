// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : entrée (gris, à droite) au-dessus du résultat (blanc, gras)
// - Pavé : 5 rangées, "=" sur deux colonnes en bas
// - Tactile : grosses touches carrées qui suivent la largeur disponible

use eframe::egui;
use egui::{Color32, RichText};

use super::etat::{AppCalc, Touche};

const FOND: Color32 = Color32::from_rgb(0x1E, 0x1E, 0x1E);
const FOND_TOUCHE: Color32 = Color32::from_rgb(0x2D, 0x2D, 0x2D);
const GRIS_ENTREE: Color32 = Color32::from_rgb(0xA0, 0xA0, 0xA0);

const RANGEES: [&[&str]; 5] = [
    &["C", "⌫", "%", "/"],
    &["7", "8", "9", "×"],
    &["4", "5", "6", "-"],
    &["1", "2", "3", "+"],
    &[".", "0", "="],
];

const ESPACE: f32 = 8.0;
const MARGE: f32 = 16.0;
const HAUTEUR_TOUCHE_MAX: f32 = 72.0;

impl AppCalc {
    /// Fond de la fenêtre (suivant le thème des réglages).
    pub fn fond(&self) -> Color32 {
        if self.reglages.sombre {
            FOND
        } else {
            Color32::from_rgb(0xF2, 0xF2, 0xF2)
        }
    }

    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let hauteur_pave = self.hauteur_pave(ui.available_width());
        let hauteur_ecran = (ui.available_height() - hauteur_pave).max(0.0);

        ui.allocate_ui(egui::vec2(ui.available_width(), hauteur_ecran), |ui| {
            self.ui_ecran(ui);
        });
        self.ui_pave(ui);
    }

    fn cote_touche(largeur: f32) -> f32 {
        ((largeur - 2.0 * MARGE - 3.0 * ESPACE) / 4.0).clamp(24.0, HAUTEUR_TOUCHE_MAX)
    }

    fn hauteur_pave(&self, largeur: f32) -> f32 {
        let cote = Self::cote_touche(largeur);
        RANGEES.len() as f32 * (cote + ESPACE) + 2.0 * MARGE
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let texte = if self.reglages.sombre {
            Color32::WHITE
        } else {
            Color32::BLACK
        };

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Max), |ui| {
            ui.add_space(24.0);
            ui.add(
                egui::Label::new(RichText::new(&self.resultat).size(64.0).strong().color(texte))
                    .truncate(),
            );
            ui.add_space(8.0);
            ui.add(
                egui::Label::new(
                    RichText::new(self.entree_affichee())
                        .size(36.0)
                        .color(GRIS_ENTREE),
                )
                .truncate(),
            );
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let cote = Self::cote_touche(ui.available_width());

        egui::Frame::new().inner_margin(MARGE).show(ui, |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

            for rangee in RANGEES {
                ui.horizontal(|ui| {
                    for etiquette in rangee.iter().copied() {
                        // "=" prend deux colonnes sur la dernière rangée
                        let largeur = if etiquette == "=" {
                            2.0 * cote + ESPACE
                        } else {
                            cote
                        };
                        self.bouton(ui, etiquette, [largeur, cote]);
                    }
                });
            }
        });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, etiquette: &str, taille: [f32; 2]) {
        let resp = ui.add_sized(
            taille,
            egui::Button::new(
                RichText::new(etiquette)
                    .size(24.0)
                    .strong()
                    .color(Color32::WHITE),
            )
            .fill(FOND_TOUCHE)
            .corner_radius(16.0),
        );

        if resp.clicked() {
            if let Some(t) = Touche::depuis_etiquette(etiquette) {
                self.appuyer(t);
            }
        }
    }
}
