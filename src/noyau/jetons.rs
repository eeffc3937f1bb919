// src/noyau/jetons.rs

use super::erreur::Cause;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => None,
        }
    }

    /// `*` et `/` lient plus fort que `+` et `-`.
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),
    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
///
/// Les espaces sont retirés AVANT le découpage : "1 2" donne le nombre 12.
/// Un nombre est une suite maximale de chiffres et de '.', lue comme un f64
/// ("1.", ".5" acceptés ; ".", "1.2.3" refusés).
pub fn tokenize(s: &str) -> Result<Vec<Tok>, Cause> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if est_chiffre(c) {
            let start = i;
            while i < chars.len() && est_chiffre(chars[i]) {
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();
            let v = lit
                .parse::<f64>()
                .map_err(|_| Cause::NombreInvalide(lit.clone()))?;
            out.push(Tok::Num(v));
            continue;
        }

        let tok = match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            _ => match Operateur::depuis_char(c) {
                Some(op) => Tok::Op(op),
                None => return Err(Cause::CaractereInattendu(c)),
            },
        };
        out.push(tok);
        i += 1;
    }

    Ok(out)
}

fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
