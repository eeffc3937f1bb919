//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : jamais de panique, et une expression bien formée
//!   ne peut échouer QUE par division par zéro

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::evaluer;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (avec valeur attendue) ------------------------ */

/// Valeur attendue : `None` si une division par un diviseur nul est rencontrée.
type Attendu = Option<f64>;

fn gen_nombre(rng: &mut Rng) -> (String, f64) {
    // inclut 0 (utile pour provoquer des divisions par zéro)
    let n = rng.pick(12);
    if rng.coin() && rng.coin() {
        let frac = rng.pick(10);
        (format!("{n}.{frac}"), format!("{n}.{frac}").parse().unwrap())
    } else {
        (format!("{n}"), n as f64)
    }
}

fn op_attendu(op: char, a: Attendu, b: Attendu) -> Attendu {
    let (a, b) = (a?, b?);
    match op {
        '+' => Some(a + b),
        '-' => Some(a - b),
        '*' => Some(a * b),
        _ => {
            if b == 0.0 {
                None
            } else {
                Some(a / b)
            }
        }
    }
}

fn gen_op(rng: &mut Rng) -> char {
    match rng.pick(4) {
        0 => '+',
        1 => '-',
        2 => '*',
        _ => '/',
    }
}

/// Expression entièrement parenthésée : chaque noeud binaire est "(g op d)".
fn gen_parenthesee(rng: &mut Rng, depth: usize) -> (String, Attendu) {
    if depth == 0 || rng.pick(4) == 0 {
        let (s, v) = gen_nombre(rng);
        return (s, Some(v));
    }
    let (sg, vg) = gen_parenthesee(rng, depth - 1);
    let (sd, vd) = gen_parenthesee(rng, depth - 1);
    let op = gen_op(rng);
    (format!("({sg}{op}{sd})"), op_attendu(op, vg, vd))
}

/// Suite plate "n op n op n ..." : référence = termes multiplicatifs puis somme.
fn gen_plate(rng: &mut Rng, len: usize) -> (String, Attendu) {
    let (s0, v0) = gen_nombre(rng);
    let mut texte = s0;

    // termes additifs : (signe, valeur du produit/quotient)
    let mut termes: Vec<(char, Attendu)> = Vec::new();
    let mut signe = '+';
    let mut courant: Attendu = Some(v0);

    for _ in 0..len {
        let op = gen_op(rng);
        let (s, v) = gen_nombre(rng);
        texte.push(op);
        texte.push_str(&s);

        match op {
            '*' | '/' => courant = op_attendu(op, courant, Some(v)),
            _ => {
                termes.push((signe, courant));
                signe = op;
                courant = Some(v);
            }
        }
    }
    termes.push((signe, courant));

    let mut acc: Attendu = Some(0.0);
    for (i, (s, t)) in termes.into_iter().enumerate() {
        acc = if i == 0 { t } else { op_attendu(s, acc, t) };
    }
    (texte, acc)
}

fn proche(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let echelle = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= 1e-9 * echelle
}

fn verifier(expr: &str, attendu: Attendu) {
    match (evaluer(expr), attendu) {
        (Ok(v), Some(a)) => assert!(proche(v, a), "expr={expr:?} obtenu={v} attendu={a}"),
        (Err(ErreurEval::DivisionParZero), None) => {}
        (obtenu, attendu) => panic!("expr={expr:?} obtenu={obtenu:?} attendu={attendu:?}"),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_plate_respecte_precedence() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let len = rng.pick(8) as usize;
        let (expr, attendu) = gen_plate(&mut rng, len);
        verifier(&expr, attendu);

        if attendu.is_some() {
            seen_ok += 1;
        } else {
            seen_div0 += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_parenthesee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);
        let (expr, attendu) = gen_parenthesee(&mut rng, 5);
        verifier(&expr, attendu);
    }
}

#[test]
fn fuzz_safe_soupe_de_caracteres_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    const ALPHABET: &[char] = &[
        '0', '1', '2', '5', '9', '.', '+', '-', '*', '/', '(', ')', ' ',
    ];

    let mut rng = Rng::new(0x5EED_u64);
    let mut seen_invalide = 0usize;

    for _ in 0..500 {
        budget(t0, max);

        let len = rng.pick(16) as usize;
        let expr: String = (0..len)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        let r = evaluer(&expr);
        // déterminisme : même entrée => même sortie
        assert_eq!(r, evaluer(&expr), "expr={expr:?}");

        if matches!(r, Err(ErreurEval::ExpressionInvalide(_))) {
            seen_invalide += 1;
        }
        if let Ok(v) = r {
            assert!(!v.is_nan(), "NaN pour expr={expr:?}");
        }
    }

    assert!(seen_invalide > 0);
}

#[test]
fn fuzz_safe_imbrication_profonde_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // évaluation itérative : 10 000 niveaux ne doivent pas faire sauter la pile d’appels
    let n = 10_000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(evaluer(&expr), Ok(1.0));

    let longue = format!("{}1", "1+".repeat(5_000));
    assert_eq!(evaluer(&longue), Ok(5_001.0));

    budget(t0, max);
}
