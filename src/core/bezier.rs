//! Kubische Bézier-Kurven mit Bogenlängen-Parametrisierung in der XZ-Ebene.
//!
//! Die Y-Komponente (Höhe) geht in keine Distanz ein: Höhen werden erst nach
//! der Abstandsberechnung vom Terrain gesampelt.
//!
//! - `arc_length`:            Gauß-Legendre-Quadratur der XZ-Geschwindigkeit auf festen Zellen
//! - `travel`:                Bisektion auf Luftlinien-Abstand (Startwert)
//! - `step_by_distance`:      eingeklammerte Newton-Verfeinerung auf exakte Bogenlänge
//! - `step_back_by_distance`: dasselbe rückwärts vom Kurvenende
//! - `step_by_chord`:         Schritt auf exakten Luftlinien-Abstand (Zaun-Modus)

use glam::{Vec2, Vec3};

/// Stützstellen der 4-Punkt-Gauß-Legendre-Quadratur auf [-1, 1]
const GAUSS_ABSCISSAE: [f64; 4] = [
    -0.861_136_311_594_052_6,
    -0.339_981_043_584_856_3,
    0.339_981_043_584_856_3,
    0.861_136_311_594_052_6,
];
/// Gewichte der 4-Punkt-Gauß-Legendre-Quadratur
const GAUSS_WEIGHTS: [f64; 4] = [
    0.347_854_845_137_453_8,
    0.652_145_154_862_546_1,
    0.652_145_154_862_546_1,
    0.347_854_845_137_453_8,
];

/// Bisektions-Iterationen für `travel`.
pub const TRAVEL_ITERATIONS: usize = 8;
/// Maximale Newton-Korrekturen in `step_by_distance`.
pub const STEP_MAX_ITERATIONS: usize = 12;
/// Restfehler (Längeneinheiten), ab dem `step_by_distance` abbricht.
pub const STEP_TOLERANCE: f32 = 0.001;
/// Bisektions-Iterationen für `step_by_chord`.
const CHORD_ITERATIONS: usize = 20;
/// Quadratur-Zellen pro Parametereinheit. Die Zellgrenzen liegen fest auf
/// k/ARC_CELLS, damit `arc_length` stetig in beiden Grenzen ist.
const ARC_CELLS: f32 = 64.0;
/// Maximale Zellen, die `step_by_distance` beim Einklammern abläuft
/// (reicht bis `t_start + 4` in die Extrapolation).
const STEP_MAX_CELLS: usize = 256;
/// Abtastschritte pro Parametereinheit beim Vorwärts-Suchen der Sehne.
pub const CHORD_SCAN_STEPS: usize = 512;

/// Kubische Bézier-Kurve B(t) = (1-t)³·A + 3(1-t)²t·B + 3(1-t)t²·C + t³·D
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    pub d: Vec3,
}

/// Projektion auf die Horizontal-Ebene.
#[inline]
pub fn xz(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

impl CubicBezier {
    /// Erstellt eine Kurve aus vier Kontrollpunkten.
    pub fn new(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Self {
        Self { a, b, c, d }
    }

    /// Gerade Strecke mit konstanter Geschwindigkeit (Kontrollpunkte auf den Dritteln).
    pub fn line(start: Vec3, end: Vec3) -> Self {
        Self {
            a: start,
            b: start.lerp(end, 1.0 / 3.0),
            c: start.lerp(end, 2.0 / 3.0),
            d: end,
        }
    }

    /// Dieselbe Kurve mit vertauschter Laufrichtung.
    pub fn reversed(&self) -> Self {
        Self {
            a: self.d,
            b: self.c,
            c: self.b,
            d: self.a,
        }
    }

    /// Position bei Parameter `t`. Werte außerhalb [0, 1] extrapolieren das Polynom.
    pub fn position(&self, t: f32) -> Vec3 {
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        inv2 * inv * self.a + 3.0 * inv2 * t * self.b + 3.0 * inv * t2 * self.c + t2 * t * self.d
    }

    /// Erste Ableitung B'(t) (nicht normalisiert).
    pub fn tangent(&self, t: f32) -> Vec3 {
        let inv = 1.0 - t;
        3.0 * inv * inv * (self.b - self.a)
            + 6.0 * inv * t * (self.c - self.b)
            + 3.0 * t * t * (self.d - self.c)
    }

    /// Betrag der XZ-Projektion der Ableitung.
    pub fn xz_speed(&self, t: f32) -> f32 {
        xz(self.tangent(t)).length()
    }

    /// Gesamtlänge in der XZ-Ebene.
    pub fn length(&self) -> f32 {
        arc_length(self, 0.0, 1.0)
    }
}

/// Nächste Zellgrenze echt oberhalb von `t`.
#[inline]
fn next_cell_boundary(t: f32) -> f32 {
    ((t * ARC_CELLS).floor() + 1.0) / ARC_CELLS
}

/// Bogenlänge zwischen `t1` und `t2` (XZ-Ebene, vorzeichenbehaftet).
///
/// Zusammengesetzte Quadratur über feste Zellen; innerhalb jeder Zelle
/// 4-Punkt-Gauß-Legendre. Nicht-endliche Grenzen liefern NaN.
pub fn arc_length(curve: &CubicBezier, t1: f32, t2: f32) -> f32 {
    if !t1.is_finite() || !t2.is_finite() {
        return f32::NAN;
    }
    if t2 < t1 {
        return -arc_length(curve, t2, t1);
    }
    let mut sum = 0.0f32;
    let mut a = t1;
    while a < t2 {
        let b = next_cell_boundary(a).min(t2);
        sum += gauss_segment(curve, a, b);
        a = b;
    }
    sum
}

/// Gauß-Legendre-Quadratur der XZ-Geschwindigkeit über ein Teilintervall.
fn gauss_segment(curve: &CubicBezier, t1: f32, t2: f32) -> f32 {
    let half = (t2 - t1) * 0.5;
    let mid = (t1 + t2) * 0.5;
    let mut sum = 0.0f32;
    for (x, w) in GAUSS_ABSCISSAE.iter().zip(GAUSS_WEIGHTS.iter()) {
        sum += *w as f32 * curve.xz_speed(mid + half * *x as f32);
    }
    sum * half
}

/// Parameter im Luftlinien-Abstand `distance` von B(`t_start`), per Bisektion.
///
/// Nur als Startwert für `step_by_distance` gedacht.
pub fn travel(curve: &CubicBezier, t_start: f32, distance: f32) -> f32 {
    let origin = xz(curve.position(t_start));
    let target_sq = distance * distance;
    let mut lo = t_start;
    let mut hi = 1.0f32;
    for _ in 0..TRAVEL_ITERATIONS {
        let mid = (lo + hi) * 0.5;
        if xz(curve.position(mid)).distance_squared(origin) < target_sq {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) * 0.5
}

/// Parameter, der `distance` Bogenlänge hinter `t_start` liegt.
///
/// Läuft zuerst zellweise vorwärts, bis die Zelle gefunden ist, in der die
/// Bogenlänge `distance` erreicht. In dieser Klammer wird mit Newton
/// verfeinert; verlässt ein Newton-Schritt die Klammer, wird stattdessen
/// halbiert. Maximal `STEP_MAX_ITERATIONS` Schritte, ein Restfehler unterhalb
/// `STEP_TOLERANCE` beendet vorzeitig. Ist die Restkurve kürzer als
/// `distance`, liegt das Ergebnis über 1.0.
pub fn step_by_distance(curve: &CubicBezier, t_start: f32, distance: f32) -> f32 {
    if distance <= 0.0 || !distance.is_finite() || !t_start.is_finite() {
        return t_start;
    }

    // Dieselbe Zerlegung wie `arc_length`, damit der Restfehler exakt dem
    // entspricht, was `arc_length(t_start, t)` liefert.
    let mut covered = 0.0f32;
    let mut lo = t_start;
    let mut hi = next_cell_boundary(lo);
    let mut segment = gauss_segment(curve, lo, hi);
    let mut cells = 1;
    while covered + segment < distance {
        if cells >= STEP_MAX_CELLS || !segment.is_finite() {
            log::trace!("step_by_distance: Kurve zu kurz für {distance}");
            return hi;
        }
        covered += segment;
        lo = hi;
        hi = next_cell_boundary(lo);
        segment = gauss_segment(curve, lo, hi);
        cells += 1;
    }

    let cell_start = lo;
    let remaining = distance - covered;
    let guess = travel(curve, t_start, distance);
    let mut t = if guess > lo && guess < hi {
        guess
    } else {
        lo + (hi - lo) * (remaining / segment).clamp(0.0, 1.0)
    };

    for _ in 0..STEP_MAX_ITERATIONS {
        let residual = (covered + gauss_segment(curve, cell_start, t)) - distance;
        if residual.abs() < STEP_TOLERANCE {
            break;
        }
        if residual < 0.0 {
            lo = t;
        } else {
            hi = t;
        }
        let speed = curve.xz_speed(t);
        let newton = t - residual / speed;
        t = if speed.is_finite() && speed > f32::EPSILON && newton > lo && newton < hi {
            newton
        } else {
            (lo + hi) * 0.5
        };
    }
    t
}

/// Rückwärts-Variante: Parameter, der `distance` Bogenlänge vor `t_end` liegt.
pub fn step_back_by_distance(curve: &CubicBezier, t_end: f32, distance: f32) -> f32 {
    1.0 - step_by_distance(&curve.reversed(), 1.0 - t_end, distance)
}

/// Parameter mit exakt `distance` Luftlinien-Abstand zu B(`t_start`).
///
/// Sehne ≤ Bogen, daher beginnt die Suche beim Bogenlängen-Schritt. Von dort
/// wird vorwärts abgetastet, bis die Sehne `distance` erstmals erreicht, und
/// in diesem Intervall bisektiert. Ein näher liegendes Kurvenende (Haarnadel)
/// beendet die Suche also nicht. Das Ergebnis hält den Abstand mindestens ein;
/// `None` nur, wenn kein t in (`t_start`, 1] weit genug entfernt ist.
pub fn step_by_chord(curve: &CubicBezier, t_start: f32, distance: f32) -> Option<f32> {
    let origin = xz(curve.position(t_start));
    let start = step_by_distance(curve, t_start, distance).clamp(t_start, 1.0);
    first_chord_crossing(curve, origin, start, distance)
}

/// Erstes t in [`t_from`, 1], dessen Punkt mindestens `distance` von `origin`
/// entfernt liegt (Abtastung plus Bisektion).
pub fn first_chord_crossing(
    curve: &CubicBezier,
    origin: Vec2,
    t_from: f32,
    distance: f32,
) -> Option<f32> {
    let target_sq = distance * distance;
    let chord_sq = |t: f32| xz(curve.position(t)).distance_squared(origin);
    if !t_from.is_finite() || !target_sq.is_finite() {
        return None;
    }
    if chord_sq(t_from) >= target_sq {
        return Some(t_from);
    }

    let step = 1.0 / CHORD_SCAN_STEPS as f32;
    let mut lo = t_from;
    loop {
        if lo >= 1.0 {
            return None;
        }
        let hi = (lo + step).min(1.0);
        if chord_sq(hi) >= target_sq {
            return Some(bisect_chord(&chord_sq, lo, hi, target_sq));
        }
        lo = hi;
    }
}

fn bisect_chord(chord_sq: &impl Fn(f32) -> f32, mut lo: f32, mut hi: f32, target_sq: f32) -> f32 {
    for _ in 0..CHORD_ITERATIONS {
        let mid = (lo + hi) * 0.5;
        if chord_sq(mid) < target_sq {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    hi
}
