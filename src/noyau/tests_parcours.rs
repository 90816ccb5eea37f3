//! Parcours utilisateur complets : chaque test rejoue une suite de touches
//! et vérifie le cliché final (historique + entrée).
//!
//! Convention de frappe (même alphabet que le clavier physique) :
//! - '0'..'9' et '.' : chiffres
//! - '+' '-' '*' '/' : opérateurs binaires
//! - 'r' : racine, '%' : pourcent, 'n' : bascule de signe
//! - '=' : égal, 'c' : efface tout, 'e' : efface l'entrée, '<' : retour arrière

use super::jetons::OpBin;
use super::moteur::{Affichage, Moteur, Saisie};

fn tape(moteur: &mut Moteur, touches: &str) -> Affichage {
    let mut dernier = moteur.affichage();
    for t in touches.chars() {
        dernier = match t {
            '0'..='9' | '.' => moteur.chiffre(t),
            '+' => moteur.operateur(OpBin::Plus),
            '-' => moteur.operateur(OpBin::Moins),
            '*' => moteur.operateur(OpBin::Fois),
            '/' => moteur.operateur(OpBin::Division),
            'r' => moteur.racine(),
            '%' => moteur.pourcent(),
            'n' => moteur.bascule_signe(),
            '=' => moteur.egal(),
            'c' => moteur.efface_tout(),
            'e' => moteur.efface_entree(),
            '<' => moteur.retour_arriere(),
            autre => panic!("touche inconnue dans le test: {autre:?}"),
        };
    }
    dernier
}

fn resultat(touches: &str) -> String {
    let mut m = Moteur::new();
    tape(&mut m, touches).entree
}

/* ------------------------ Frappe de l'entrée ------------------------ */

#[test]
fn chiffres_concatenes_un_seul_point() {
    let mut m = Moteur::new();
    let aff = tape(&mut m, "12.34.5");
    // le second '.' est ignoré en silence
    assert_eq!(aff.entree, "12.345");
}

#[test]
fn zero_de_tete_remplace() {
    let mut m = Moteur::new();
    assert_eq!(tape(&mut m, "007").entree, "7");
}

#[test]
fn point_sur_zero() {
    let mut m = Moteur::new();
    assert_eq!(tape(&mut m, ".5").entree, "0.5");
}

#[test]
fn retour_arriere_plancher_zero() {
    let mut m = Moteur::new();
    assert_eq!(tape(&mut m, "123<<").entree, "1");
    assert_eq!(tape(&mut m, "<<").entree, "0");
}

#[test]
fn bascule_signe() {
    let mut m = Moteur::new();
    assert_eq!(tape(&mut m, "5n").entree, "-5");
    assert_eq!(tape(&mut m, "n").entree, "5");
    // no-op complet sur "0" (la saisie ne bouge pas non plus)
    let mut m2 = Moteur::new();
    tape(&mut m2, "n");
    assert_eq!(m2.saisie(), Saisie::Aucune);
}

/* ------------------------ Lois d'évaluation ------------------------ */

#[test]
fn gauche_droite_sans_precedence() {
    assert_eq!(resultat("2+3*4="), "20");
}

#[test]
fn remplacement_d_operateur() {
    // 5 + × 3 = : le × remplace le +, sans toucher aux opérandes
    assert_eq!(resultat("5+*3="), "15");
}

#[test]
fn pourcent_relatif_apres_moins() {
    assert_eq!(resultat("200-10%="), "180");
}

#[test]
fn pourcent_direct_apres_fois() {
    assert_eq!(resultat("200*10%="), "20");
}

#[test]
fn pourcent_nu() {
    assert_eq!(resultat("9%="), "0.09");
}

#[test]
fn pourcent_apres_operateur_sans_effet() {
    // % juste après + : rien à appliquer, la séquence ne bouge pas
    assert_eq!(resultat("5+%3="), "8");
}

#[test]
fn pourcent_chaine_un_seul_niveau() {
    // comportement épinglé : le second % est relatif au 10 résolu,
    // pas au cumul 110
    assert_eq!(resultat("100+10%+5%="), "110.5");
}

#[test]
fn racine_prefixe() {
    assert_eq!(resultat("r9="), "3");
}

#[test]
fn racine_d_un_negatif() {
    // l'entrée "-9" n'est jamais engagée (dernière action = fonction),
    // la racine reste sans opérande
    assert_eq!(resultat("r9n="), "Error");
    // engagée via un opérateur, elle donne √(-9) : invalide aussi
    assert_eq!(resultat("r9n+4="), "Error");
}

#[test]
fn bruit_flottant_normalise() {
    assert_eq!(resultat(".1+.2="), "0.3");
}

#[test]
fn division_par_zero() {
    assert_eq!(resultat("5/0="), "Error");
}

/* ------------------------ Autour de l'égal ------------------------ */

#[test]
fn historique_fige_apres_egal() {
    let mut m = Moteur::new();
    let aff = tape(&mut m, "2+3*4=");
    assert_eq!(aff.historique, "2 + 3 × 4 =");
    assert_eq!(aff.entree, "20");
}

#[test]
fn historique_vivant_avant_egal() {
    let mut m = Moteur::new();
    assert_eq!(tape(&mut m, "5+").historique, "5 +");
}

#[test]
fn chiffre_apres_egal_repart_a_neuf() {
    let mut m = Moteur::new();
    tape(&mut m, "5+3=");
    let aff = tape(&mut m, "7");
    assert!(m.expression().is_empty());
    assert_eq!(aff.historique, "");
    assert_eq!(aff.entree, "7");
}

#[test]
fn resultat_comme_operande_gauche() {
    assert_eq!(resultat("5+3=+2="), "10");
}

#[test]
fn egal_repete_reprend_le_resultat() {
    assert_eq!(resultat("5+3=="), "8");
}

#[test]
fn egal_sans_sequence_est_un_noop() {
    // signe seul : rien n'est engagé, la séquence reste vide
    let mut m = Moteur::new();
    let aff = tape(&mut m, "5n=");
    assert_eq!(aff.entree, "-5");
    assert_eq!(aff.historique, "");
    assert_eq!(m.saisie(), Saisie::Fonction);
}

#[test]
fn egal_a_vide_evalue_l_entree_zero() {
    // l'entrée "0" est engagée, donc on évalue bien "0 ="
    let mut m = Moteur::new();
    let aff = tape(&mut m, "=");
    assert_eq!(aff.entree, "0");
    assert_eq!(aff.historique, "0 =");
    assert_eq!(m.saisie(), Saisie::Egal);
}

#[test]
fn retour_arriere_apres_egal_fige() {
    let mut m = Moteur::new();
    tape(&mut m, "5+3=");
    let aff = tape(&mut m, "<");
    assert_eq!(aff.entree, "8");
    assert_eq!(aff.historique, "5 + 3 =");
}

#[test]
fn racine_apres_egal_engage_le_zero() {
    // après =, racine engage l'entrée remise à "0"
    // -> séquence 0 √ n, invalide
    assert_eq!(resultat("9=r4="), "Error");
}

#[test]
fn pourcent_apres_egal_double_l_operande() {
    // après =, l'opérande est repris deux fois (n n %), invalide
    assert_eq!(resultat("50=%="), "Error");
}

/* ------------------------ Effacements & reprise ------------------------ */

#[test]
fn efface_tout_remet_tout() {
    let mut m = Moteur::new();
    tape(&mut m, "12+34%");
    let aff = tape(&mut m, "c");
    assert_eq!(aff.entree, "0");
    assert_eq!(aff.historique, "");
    assert!(m.expression().is_empty());
    assert_eq!(m.saisie(), Saisie::Aucune);
}

#[test]
fn efface_entree_conserve_l_expression() {
    let mut m = Moteur::new();
    tape(&mut m, "5+3");
    let aff = tape(&mut m, "e");
    assert_eq!(aff.entree, "0");
    assert_eq!(aff.historique, "5 +");
    assert_eq!(tape(&mut m, "4=").entree, "9");
}

#[test]
fn reprise_apres_error() {
    let mut m = Moteur::new();
    assert_eq!(tape(&mut m, "5/0=").entree, "Error");
    // le moteur reste utilisable : un chiffre repart proprement
    let aff = tape(&mut m, "7");
    assert_eq!(aff.entree, "7");
    assert_eq!(aff.historique, "");
    assert_eq!(tape(&mut m, "+3=").entree, "10");
}
