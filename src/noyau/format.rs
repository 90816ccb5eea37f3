// src/noyau/format.rs
//
// Normalisation du résultat pour l'affichage.
//
// Règles (conventions calculatrice) :
// - non fini (÷0, racine invalide…)  -> "Error"
// - sinon : arrondi à 12 chiffres significatifs
// - forme fixe si l'exposant décimal e vérifie -6 ≤ e < 12,
//   forme exponentielle sinon (même frontière que toPrecision)
// - en forme fixe : zéros fractionnaires finaux retirés, point final retiré
// - jamais de '+' de tête ; tout zéro s'affiche "0"
//
// La sortie est toujours réinjectable telle quelle comme entrée courante
// ou comme opérande d'expression.

/// Nombre de chiffres significatifs affichés.
const CHIFFRES_SIGNIFICATIFS: usize = 12;

/// Formate un résultat numérique en chaîne d'affichage.
pub fn format_nombre(x: f64) -> String {
    if !x.is_finite() {
        return "Error".to_string();
    }
    if x == 0.0 {
        // couvre aussi -0.0 (sinon "-0" à l'écran)
        return "0".to_string();
    }

    // Mantisse arrondie à 12 chiffres -> exposant décimal fiable.
    let sci = format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, x);
    let (mantisse, exposant) = match sci.split_once('e') {
        Some(p) => p,
        None => return sci, // inatteignable pour un f64 fini
    };
    let e: i32 = match exposant.parse() {
        Ok(v) => v,
        Err(_) => return sci,
    };

    if e < -6 || e >= CHIFFRES_SIGNIFICATIFS as i32 {
        // forme exponentielle, exposant signé explicite (1.00000000000e+15)
        return format!("{mantisse}e{e:+}");
    }

    // Forme fixe : 12 chiffres significatifs = (11 - e) décimales.
    let decimales = (CHIFFRES_SIGNIFICATIFS as i32 - 1 - e).max(0) as usize;
    let s = format!("{x:.decimales$}");
    retire_zeros_finaux(s)
}

/// Retire les zéros fractionnaires finaux, puis un éventuel point final.
/// Ne s'applique qu'à la forme fixe (jamais de 'e' dans `s`).
fn retire_zeros_finaux(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    let coupe = s.trim_end_matches('0').trim_end_matches('.');
    coupe.to_string()
}
