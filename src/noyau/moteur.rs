// src/noyau/moteur.rs
//
// Machine à états de saisie.
// -------------------------
// Trois morceaux d'état, et rien d'autre :
// - expression : jetons déjà engagés (opérateur pressé, fonction appliquée)
// - entree     : littéral décimal en cours de frappe (jamais engagé)
// - saisie     : nature de la DERNIÈRE action engagée, qui gouverne la
//                composition de l'action suivante
//
// Chaque action est totale : elle produit toujours un nouvel état valide,
// même quand l'évaluation échoue (l'entrée devient "Error" et la saisie
// passe en Egal ; l'action suivante repart proprement).
//
// Contrats :
// - aucun accès UI ici (la vue ne lit que le cliché retourné)
// - `entree` contient au plus un '.', et seulement des caractères
//   qu'une action chiffre/signe peut produire

use super::eval::evaluer;
use super::format::format_nombre;
use super::jetons::{format_jetons, Jeton, OpBin};

/// Nature de la dernière action engagée.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Saisie {
    #[default]
    Aucune,
    Nombre,
    Operateur,
    Fonction,
    Egal,
}

/// Cliché affichable retourné par chaque action.
///
/// - `historique` : expression vivante jointe, ou — juste après `egal` —
///   la chaîne figée `"<expr> ="`
/// - `entree` : littéral en cours, ou le résultat formaté après `egal`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    pub historique: String,
    pub entree: String,
}

/// Moteur d'expression : possède exclusivement l'état, exposé action
/// par action. Une action par geste utilisateur, pas de suspension,
/// pas d'état partagé.
#[derive(Clone, Debug)]
pub struct Moteur {
    expression: Vec<Jeton>,
    entree: String,
    saisie: Saisie,
    // "<expr> =" figé à la dernière évaluation (présentation seulement,
    // jamais relu par le moteur)
    fige: String,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            expression: Vec::new(),
            entree: "0".to_string(),
            saisie: Saisie::Aucune,
            fige: String::new(),
        }
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cliché courant (sans mutation).
    pub fn affichage(&self) -> Affichage {
        let historique = if self.saisie == Saisie::Egal {
            self.fige.clone()
        } else {
            format_jetons(&self.expression)
        };
        Affichage {
            historique,
            entree: self.entree.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn saisie(&self) -> Saisie {
        self.saisie
    }

    #[cfg(test)]
    pub(crate) fn expression(&self) -> &[Jeton] {
        &self.expression
    }

    /* ------------------------ Actions ------------------------ */

    /// Chiffre '0'..'9' ou '.'. Tout autre caractère est ignoré
    /// (la construction de l'entrée interdit le non-numérique).
    pub fn chiffre(&mut self, d: char) -> Affichage {
        if !(d.is_ascii_digit() || d == '.') {
            return self.affichage();
        }

        if self.saisie == Saisie::Egal {
            // nouveau calcul
            self.expression.clear();
            self.entree = "0".to_string();
        }

        if d == '.' {
            // un seul point par littéral
            if !self.entree.contains('.') {
                self.entree.push('.');
            }
        } else if self.entree == "0" {
            // pas de zéro de tête
            self.entree = d.to_string();
        } else {
            self.entree.push(d);
        }

        self.saisie = Saisie::Nombre;
        self.affichage()
    }

    /// Opérateur binaire.
    pub fn operateur(&mut self, op: OpBin) -> Affichage {
        if matches!(self.saisie, Saisie::Operateur | Saisie::Fonction) {
            // l'utilisateur se ravise : on remplace l'opérateur de queue.
            // Derrière √ ou % (un nombre vient d'être complété), on engage
            // d'abord l'entrée non nulle, puis le nouvel opérateur.
            match self.expression.last_mut() {
                Some(Jeton::Op(dernier)) => *dernier = op,
                Some(Jeton::Racine | Jeton::Pourcent) => {
                    if self.entree != "0" {
                        self.expression.push(Jeton::Nombre(self.entree.clone()));
                    }
                    self.expression.push(Jeton::Op(op));
                    self.entree = "0".to_string();
                }
                Some(Jeton::Nombre(_)) | None => {
                    // expression vide (ex: signe seul) : rien à remplacer
                }
            }
        } else {
            if self.saisie == Saisie::Egal {
                // le résultat devient l'opérande de gauche
                self.expression = vec![Jeton::Nombre(self.entree.clone())];
            } else {
                self.expression.push(Jeton::Nombre(self.entree.clone()));
            }
            self.expression.push(Jeton::Op(op));
            self.entree = "0".to_string();
        }

        self.saisie = Saisie::Operateur;
        self.affichage()
    }

    /// Racine carrée, enregistrée comme marqueur PRÉFIXE : elle
    /// s'appliquera au nombre tapé juste après.
    pub fn racine(&mut self) -> Affichage {
        if self.saisie == Saisie::Egal {
            self.expression.clear();
            self.entree = "0".to_string();
        }

        if matches!(self.saisie, Saisie::Nombre | Saisie::Egal) {
            self.expression.push(Jeton::Nombre(self.entree.clone()));
        }

        self.expression.push(Jeton::Racine);
        self.entree = "0".to_string();
        self.saisie = Saisie::Fonction;
        self.affichage()
    }

    /// Pourcentage, marqueur POSTFIXE sur le nombre qui précède.
    /// Sans opérande (juste après un opérateur), la séquence ne bouge pas.
    pub fn pourcent(&mut self) -> Affichage {
        if self.saisie == Saisie::Egal {
            // le résultat est l'opérande du pourcentage
            self.expression = vec![Jeton::Nombre(self.entree.clone())];
        }

        if matches!(self.saisie, Saisie::Nombre | Saisie::Egal) {
            self.expression.push(Jeton::Nombre(self.entree.clone()));
            self.expression.push(Jeton::Pourcent);
            self.entree = "0".to_string();
        }

        self.saisie = Saisie::Fonction;
        self.affichage()
    }

    /// Bascule du signe de l'entrée courante. Strictement local à
    /// l'entrée ; no-op complet sur "0".
    pub fn bascule_signe(&mut self) -> Affichage {
        if self.entree == "0" {
            return self.affichage();
        }
        if let Some(reste) = self.entree.strip_prefix('-') {
            self.entree = reste.to_string();
        } else {
            self.entree.insert(0, '-');
        }
        self.saisie = Saisie::Fonction;
        self.affichage()
    }

    /// C : remise à zéro totale.
    pub fn efface_tout(&mut self) -> Affichage {
        self.expression.clear();
        self.entree = "0".to_string();
        self.saisie = Saisie::Aucune;
        self.fige.clear();
        self.affichage()
    }

    /// CE : efface seulement l'entrée courante.
    pub fn efface_entree(&mut self) -> Affichage {
        self.entree = "0".to_string();
        self.affichage()
    }

    /// Retour arrière sur l'entrée. No-op après `egal` (résultat figé).
    pub fn retour_arriere(&mut self) -> Affichage {
        if self.saisie == Saisie::Egal {
            return self.affichage();
        }
        if self.entree.chars().count() > 1 {
            self.entree.pop();
        } else {
            self.entree = "0".to_string();
        }
        self.affichage()
    }

    /// Évalue la séquence engagée (+ l'entrée en cours si la dernière
    /// action n'était pas un opérateur/fonction).
    pub fn egal(&mut self) -> Affichage {
        let mut jetons = self.expression.clone();
        if !matches!(self.saisie, Saisie::Operateur | Saisie::Fonction) {
            jetons.push(Jeton::Nombre(self.entree.clone()));
        }

        if jetons.is_empty() {
            return self.affichage();
        }

        // Chaîne figée AVANT évaluation (même en cas d'échec).
        self.fige = format!("{} =", format_jetons(&jetons));

        self.entree = match evaluer(&jetons) {
            Ok(v) => format_nombre(v),
            // séquence malformée : même rendu qu'un résultat non fini
            Err(_) => "Error".to_string(),
        };

        self.expression.clear();
        self.saisie = Saisie::Egal;
        self.affichage()
    }
}
