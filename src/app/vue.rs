// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé complet : chiffres, opérateurs, √, %, ±, CE/C/⌫/=
// - Clavier physique : mêmes gestes que le pavé (voir clavier())
//
// Note :
// - La vue ne décide RIEN : chaque clic/touche devient un geste
//   du moteur, et on affiche le cliché retourné.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::OpBin;

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Operation(OpBin),
    Racine,
    Pourcent,
    Signe,
    EffaceTout,
    EffaceEntree,
    Retour,
    Egal,
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // historique : expression vivante, ou "<expr> =" figé
                    ui.weak(egui::RichText::new(self.historique.as_str()).monospace());
                    ui.label(
                        egui::RichText::new(self.entree.as_str())
                            .monospace()
                            .size(28.0)
                            .strong(),
                    );
                });
            });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        // Touches fonctions (hors grille, comme des touches rapides)
        ui.horizontal_wrapped(|ui| {
            self.bouton(ui, "√", "Racine carrée (préfixe)", Touche::Racine);
            self.bouton(ui, "%", "Pourcentage", Touche::Pourcent);
        });

        ui.add_space(4.0);

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "CE", "Efface l'entrée", Touche::EffaceEntree);
                self.bouton(ui, "C", "Efface tout", Touche::EffaceTout);
                self.bouton(ui, "⌫", "Retour arrière", Touche::Retour);
                self.bouton(ui, "÷", "Division", Touche::Operation(OpBin::Division));
                ui.end_row();

                self.bouton_chiffre(ui, '7');
                self.bouton_chiffre(ui, '8');
                self.bouton_chiffre(ui, '9');
                self.bouton(ui, "×", "Multiplication", Touche::Operation(OpBin::Fois));
                ui.end_row();

                self.bouton_chiffre(ui, '4');
                self.bouton_chiffre(ui, '5');
                self.bouton_chiffre(ui, '6');
                self.bouton(ui, "−", "Soustraction", Touche::Operation(OpBin::Moins));
                ui.end_row();

                self.bouton_chiffre(ui, '1');
                self.bouton_chiffre(ui, '2');
                self.bouton_chiffre(ui, '3');
                self.bouton(ui, "+", "Addition", Touche::Operation(OpBin::Plus));
                ui.end_row();

                self.bouton(ui, "±", "Bascule du signe", Touche::Signe);
                self.bouton_chiffre(ui, '0');
                self.bouton_chiffre(ui, '.');
                self.bouton(ui, "=", "Égal", Touche::Egal);
                ui.end_row();
            });
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, d: char) {
        let label = d.to_string();
        self.bouton(ui, &label, "", Touche::Chiffre(d));
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let mut resp = ui.add_sized([56.0, 36.0], egui::Button::new(label));
        if !tip.is_empty() {
            resp = resp.on_hover_text(tip);
        }
        if resp.clicked() {
            self.geste(touche);
        }
    }

    fn geste(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(d) => self.chiffre(d),
            Touche::Operation(op) => self.operateur(op),
            Touche::Racine => self.racine(),
            Touche::Pourcent => self.pourcent(),
            Touche::Signe => self.bascule_signe(),
            Touche::EffaceTout => self.efface_tout(),
            Touche::EffaceEntree => self.efface_entree(),
            Touche::Retour => self.retour_arriere(),
            Touche::Egal => self.egal(),
        }
    }

    /* ------------------------ Clavier physique ------------------------ */

    /// Correspondance clavier -> gestes :
    /// chiffres et '.' tapent ; + - * / opèrent ; Enter/= évalue ;
    /// Backspace efface un caractère ; Escape efface tout ;
    /// Delete efface l'entrée ; r = racine ; % = pourcent ; n = signe.
    pub fn clavier(&mut self, ctx: &egui::Context) {
        let evenements = ctx.input(|i| i.events.clone());

        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        match c {
                            '0'..='9' | '.' => self.chiffre(c),
                            '+' => self.operateur(OpBin::Plus),
                            '-' => self.operateur(OpBin::Moins),
                            '*' => self.operateur(OpBin::Fois),
                            '/' => self.operateur(OpBin::Division),
                            '=' => self.egal(),
                            '%' => self.pourcent(),
                            'r' | 'R' => self.racine(),
                            'n' | 'N' => self.bascule_signe(),
                            _ => {}
                        }
                    }
                }

                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.egal(),
                    egui::Key::Backspace => self.retour_arriere(),
                    egui::Key::Escape => self.efface_tout(),
                    egui::Key::Delete => self.efface_entree(),
                    _ => {}
                },

                _ => {}
            }
        }
    }
}
