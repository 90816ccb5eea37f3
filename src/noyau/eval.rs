// src/noyau/eval.rs
//
// Évaluation d'une séquence de jetons engagée (dernier opérande inclus).
//
// Deux passes :
// 1) résolution des unaires (√ préfixe, % postfixe) -> nombres résolus
// 2) réduction stricte gauche-droite, SANS précédence :
//    a op1 b op2 c == (a op1 b) op2 c quel que soit op1/op2
//
// La division par zéro n'est PAS une erreur ici : elle produit un f64
// non fini que le formateur rendra "Error". Les séquences malformées
// (racine sans opérande, nombres adjacents, littéral imparsable…)
// remontent en Err ; le moteur les rend "Error" aussi, sans jamais
// invalider son propre état.

use super::jetons::{Jeton, OpBin};

/// Jeton après résolution des unaires.
#[derive(Clone, Copy, Debug)]
enum Resolu {
    Nombre(f64),
    Op(OpBin),
}

/// Évalue une séquence complète de jetons.
pub fn evaluer(jetons: &[Jeton]) -> Result<f64, String> {
    let resolus = resolution_unaires(jetons)?;
    reduction_gauche_droite(&resolus)
}

/* ------------------------ Passe 1 : unaires ------------------------ */

fn parse_nombre(s: &str) -> Result<f64, String> {
    s.parse::<f64>()
        .map_err(|_| format!("littéral invalide: {s:?}"))
}

fn resolution_unaires(jetons: &[Jeton]) -> Result<Vec<Resolu>, String> {
    let mut out: Vec<Resolu> = Vec::with_capacity(jetons.len());
    let mut i = 0;

    while i < jetons.len() {
        match &jetons[i] {
            Jeton::Nombre(s) => {
                out.push(Resolu::Nombre(parse_nombre(s)?));
                i += 1;
            }

            Jeton::Op(op) => {
                out.push(Resolu::Op(*op));
                i += 1;
            }

            Jeton::Racine => {
                // préfixe : consomme le jeton suivant, qui doit être un nombre
                let suivant = match jetons.get(i + 1) {
                    Some(Jeton::Nombre(s)) => parse_nombre(s)?,
                    _ => return Err("racine sans opérande".into()),
                };
                if suivant < 0.0 {
                    // pas de résultats complexes
                    return Err("racine d'un opérande négatif".into());
                }
                out.push(Resolu::Nombre(suivant.sqrt()));
                i += 2;
            }

            Jeton::Pourcent => {
                // postfixe : consomme la dernière valeur résolue
                let dernier = match out.pop() {
                    Some(Resolu::Nombre(v)) => v,
                    _ => return Err("pourcentage sans opérande".into()),
                };

                // Sémantique contextuelle : derrière + ou −, le pourcentage
                // est relatif à l'opérande de base (200 − 10 % => 200 − 20).
                // Derrière × ou ÷ (ou seul), simple division par 100.
                let valeur = match (out.len().checked_sub(2).map(|k| out[k]), out.last()) {
                    (Some(Resolu::Nombre(base)), Some(Resolu::Op(OpBin::Plus | OpBin::Moins))) => {
                        base * (dernier / 100.0)
                    }
                    (None, Some(Resolu::Op(OpBin::Plus | OpBin::Moins))) => {
                        return Err("pourcentage sans base".into());
                    }
                    _ => dernier / 100.0,
                };

                out.push(Resolu::Nombre(valeur));
                i += 1;
            }
        }
    }

    Ok(out)
}

/* ------------------------ Passe 2 : réduction ------------------------ */

fn applique(acc: f64, op: OpBin, v: f64) -> f64 {
    match op {
        OpBin::Plus => acc + v,
        OpBin::Moins => acc - v,
        OpBin::Fois => acc * v,
        OpBin::Division => acc / v, // ÷0 -> inf/NaN, rendu "Error" au format
    }
}

/// Réduit une alternance stricte nombre (op nombre)* ; tout écart
/// (nombres adjacents, opérateur final…) est une séquence invalide.
fn reduction_gauche_droite(resolus: &[Resolu]) -> Result<f64, String> {
    let mut it = resolus.iter();

    let mut acc = match it.next() {
        Some(Resolu::Nombre(v)) => *v,
        _ => return Err("séquence invalide".into()),
    };

    loop {
        let op = match it.next() {
            None => return Ok(acc),
            Some(Resolu::Op(op)) => *op,
            Some(Resolu::Nombre(_)) => return Err("séquence invalide".into()),
        };
        let v = match it.next() {
            Some(Resolu::Nombre(v)) => *v,
            _ => return Err("séquence invalide".into()),
        };
        acc = applique(acc, op, v);
    }
}
