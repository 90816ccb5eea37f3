//! Noyau calculatrice
//!
//! Organisation interne :
//! - jetons.rs : jetons typés (nombre / opérateur / √ / %) + forme texte
//! - moteur.rs : machine à états de saisie (une action par geste)
//! - eval.rs   : résolution des unaires + réduction gauche-droite
//! - format.rs : normalisation du résultat (12 chiffres significatifs)
//!
//! Conventions calculatrice assumées : AUCUNE précédence d'opérateurs
//! (réduction strictement gauche-droite), pourcentage contextuel,
//! racine préfixe. Voir moteur.rs pour les contrats d'état.

pub mod eval;
pub mod format;
pub mod jetons;
pub mod moteur;

#[cfg(test)]
mod tests_parcours;


// API publique minimale
pub use jetons::OpBin;
pub use moteur::{Affichage, Moteur};
