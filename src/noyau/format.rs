// src/noyau/format.rs

/// Nombre maximal de décimales fixes (au-delà, f64 n’a plus rien à dire).
pub const DECIMALES_MAX: usize = 15;

/// Affichage d’un résultat.
///
/// - `None` : plus courte écriture qui relit la même valeur, avec ".0" pour les entiers
///   (14 -> "14.0", 0.1+0.2 -> "0.30000000000000004", 1e7 -> "10000000.0", 1e16 -> "1e16")
/// - `Some(n)` : exactement n décimales (arrondi), n borné à DECIMALES_MAX
///
/// -0 s’affiche comme 0.
pub fn format_resultat(v: f64, decimales: Option<usize>) -> String {
    let v = if v == 0.0 { 0.0 } else { v };

    match decimales {
        None => format!("{v:?}"),
        Some(n) => {
            let n = n.min(DECIMALES_MAX);
            let s = format!("{v:.n$}");
            // "-0.00" après arrondi d’un petit négatif
            if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
                s[1..].to_string()
            } else {
                s
            }
        }
    }
}
