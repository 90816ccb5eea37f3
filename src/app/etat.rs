//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur et le dernier cliché affichable.
//! La vue ne lit QUE ce cliché ; elle ne regarde jamais dans le moteur.
//!
//! Contrats :
//! - une méthode publique par geste utilisateur, qui délègue au moteur
//!   et dépose le cliché retourné
//! - aucune logique de calcul ici (tout vit dans le noyau)

use crate::noyau::{Affichage, Moteur, OpBin};

#[derive(Clone, Debug)]
pub struct AppCalc {
    moteur: Moteur,

    // --- cliché affiché ---
    pub historique: String,
    pub entree: String,
}

impl Default for AppCalc {
    fn default() -> Self {
        let moteur = Moteur::new();
        let Affichage { historique, entree } = moteur.affichage();
        Self {
            moteur,
            historique,
            entree,
        }
    }
}

impl AppCalc {
    fn depose(&mut self, aff: Affichage) {
        self.historique = aff.historique;
        self.entree = aff.entree;
    }

    /* ------------------------ Gestes (délégation pure) ------------------------ */

    pub fn chiffre(&mut self, d: char) {
        let aff = self.moteur.chiffre(d);
        self.depose(aff);
    }

    pub fn operateur(&mut self, op: OpBin) {
        let aff = self.moteur.operateur(op);
        self.depose(aff);
    }

    pub fn racine(&mut self) {
        let aff = self.moteur.racine();
        self.depose(aff);
    }

    pub fn pourcent(&mut self) {
        let aff = self.moteur.pourcent();
        self.depose(aff);
    }

    pub fn bascule_signe(&mut self) {
        let aff = self.moteur.bascule_signe();
        self.depose(aff);
    }

    pub fn efface_tout(&mut self) {
        let aff = self.moteur.efface_tout();
        self.depose(aff);
    }

    pub fn efface_entree(&mut self) {
        let aff = self.moteur.efface_entree();
        self.depose(aff);
    }

    pub fn retour_arriere(&mut self) {
        let aff = self.moteur.retour_arriere();
        self.depose(aff);
    }

    pub fn egal(&mut self) {
        let aff = self.moteur.egal();
        self.depose(aff);
    }
}
