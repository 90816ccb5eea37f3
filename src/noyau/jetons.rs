// src/noyau/jetons.rs

use std::fmt;

/// Opérateur binaire du pavé.
///
/// Les symboles d'affichage sont ceux du clavier visuel (− × ÷),
/// pas ceux du clavier physique (- * /) : la correspondance est
/// faite côté vue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBin {
    Plus,
    Moins,
    Fois,
    Division,
}

impl OpBin {
    pub fn symbole(self) -> &'static str {
        match self {
            OpBin::Plus => "+",
            OpBin::Moins => "−",
            OpBin::Fois => "×",
            OpBin::Division => "÷",
        }
    }
}

impl fmt::Display for OpBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

/// Jeton d'une expression engagée.
///
/// - `Nombre` : littéral décimal tel que tapé (signe optionnel, au plus un '.')
/// - `Op`     : opérateur binaire
/// - `Racine` : marqueur unaire PRÉFIXE (s'applique au nombre tapé après)
/// - `Pourcent` : marqueur unaire POSTFIXE (s'applique au nombre tapé avant)
///
/// La séquence est append/replace-only : une fois engagé, un jeton
/// n'est jamais réordonné.
#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Nombre(String),
    Op(OpBin),
    Racine,
    Pourcent,
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(s) => f.write_str(s),
            Jeton::Op(op) => f.write_str(op.symbole()),
            Jeton::Racine => f.write_str("√"),
            Jeton::Pourcent => f.write_str("%"),
        }
    }
}

/// Forme textuelle d'une séquence de jetons (affichage historique).
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::with_capacity(jetons.len());
    for j in jetons {
        out.push(j.to_string());
    }
    out.join(" ")
}
