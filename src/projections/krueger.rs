use crate::utility::{polyval, polyval_ratio};

/// Number of terms kept in the Krueger series
pub const ORDERS: usize = 8;

const ORDER_LIST: [u32; ORDERS] = [2, 4, 6, 8, 10, 12, 14, 16];

// a/A * (1 + n) * 16384, polynomial in n^2 of order 4
const RECTIFYING_COEFF: [f64; 6] = [
    25., 64., 256., 4096., 16384., 16384.,
];  // count = 6

#[allow(clippy::unreadable_literal)]
const ALPHA_COEFF: [(f64, f64); 36] = [
    // alpha[2]/n^1, polynomial in n of order 7
    (-18975107., 50803200.), (72161., 387072.), (7891., 37800.), (-127., 288.),
    (41., 180.), (5., 16.), (-2., 3.), (1., 2.),
    // alpha[4]/n^2, polynomial in n of order 6
    (148003883., 174182400.), (13769., 28800.), (-1983433., 1935360.), (281., 630.),
    (557., 1440.), (-3., 5.), (13., 48.),
    // alpha[6]/n^3, polynomial in n of order 5
    (79682431., 79833600.), (-67102379., 29030400.), (167603., 181440.), (15061., 26880.),
    (-103., 140.), (61., 240.),
    // alpha[8]/n^4, polynomial in n of order 4
    (-40176129013., 7664025600.), (97445., 49896.), (6601661., 7257600.), (-179., 168.),
    (49561., 161280.),
    // alpha[10]/n^5, polynomial in n of order 3
    (2605413599., 622702080.), (14644087., 9123840.), (-3418889., 1995840.), (34729., 80640.),
    // alpha[12]/n^6, polynomial in n of order 2
    (175214326799., 58118860800.), (-30705481., 10378368.), (212378941., 319334400.),
    // alpha[14]/n^7, polynomial in n of order 1
    (-16759934899., 3113510400.), (1522256789., 1383782400.),
    // alpha[16]/n^8, polynomial in n of order 0
    (1424729850961., 743921418240.),
];  // count = 36

/// Coefficients of the Krueger n-series for the even orders 2, 4, ..., 16,
/// each truncated at the 8th power of the third flattening.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KruegerCoefficients {
    alpha: [f64; ORDERS],
}

impl KruegerCoefficients {
    /// Evaluates the series for third flattening `n`. Every coefficient is
    /// exactly zero for a sphere.
    ///
    /// # Usage
    ///
    /// ```
    /// use gridconvert::projections::krueger::KruegerCoefficients;
    ///
    /// let alpha = KruegerCoefficients::compute(0.0016792203946287);
    /// assert!((alpha.get(2).unwrap() - 8.377318247285513e-4).abs() < 1e-15);
    /// assert!(alpha.get(3).is_none());
    ///
    /// let sphere = KruegerCoefficients::compute(0.0);
    /// assert!(sphere.iter().all(|(_, alpha)| alpha == 0.0));
    /// ```
    pub fn compute(n: f64) -> KruegerCoefficients {
        let mut alpha = [0_f64; ORDERS];

        // alpha[2r] only involves powers of n from r upward
        let mut o = 0;
        let mut d = n;

        for (l, value) in alpha.iter_mut().enumerate() {
            let m = ORDERS - l;
            *value = d * polyval_ratio(&ALPHA_COEFF[o..o + m], n);
            o += m;
            d *= n;
        }

        Self { alpha }
    }

    /// Coefficient of the given even order in `2..=16`.
    pub fn get(&self, order: u32) -> Option<f64> {
        ORDER_LIST
            .iter()
            .position(|&o| o == order)
            .map(|l| self.alpha[l])
    }

    /// `(order, coefficient)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        ORDER_LIST
            .iter()
            .copied()
            .zip(self.alpha.iter().copied())
    }
}

/// Rectifying radius of an ellipsoid with semi-major axis `a` and third
/// flattening `n`, evaluated to the 8th power of `n`.
pub fn rectifying_radius(a: f64, n: f64) -> f64 {
    let m = RECTIFYING_COEFF.len() - 2;

    a * polyval(&RECTIFYING_COEFF[0..=m], n.powi(2)) / (RECTIFYING_COEFF[m + 1] * (1. + n))
}
