use fastrand::Rng;
use num::complex::Complex64;
use polybasis::{
    __testing::{chebyshev_t, check_close, RandStreamR64},
    cheb, poly, ChebPoly, ChebPoly64, Error, LaurentPoly, Poly64, SparsePoly,
};

fn init_logger() {
    // several tests may race to install it
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init();
}

fn rand_coeffs(stream: &mut RandStreamR64, rng: &mut Rng, max_len: usize) -> Vec<f64> {
    let n = rng.usize(1..=max_len);
    stream.take_vec(n)
}

#[test]
fn chebyshev_scenarios() {
    init_logger();
    let c = cheb![1.0, 0.0, 3.0, 4.0];
    assert_eq!(c.eval(0.5).unwrap(), -4.5);
    assert_eq!(c.eval_unchecked(5.0).unwrap(), 2088.0);
    assert!(matches!(c.eval(5.0), Err(Error::Domain { .. })));

    let c = cheb![2.5, 1.5, 1.0];
    assert_eq!(c.eval(0.0).unwrap(), 1.5);
    assert_eq!(
        c.eval_many([-1.0, -0.5, 0.0, 0.5, 1.0]).unwrap(),
        vec![2.0, 1.25, 1.5, 2.75, 5.0]
    );

    assert_eq!(ChebPoly64::variable_poly().to_vec(), vec![0.0, 1.0]);
    assert_eq!(Poly64::variable_poly().to_vec(), vec![0.0, 1.0]);
}

#[test]
fn chebyshev_division_scenario() {
    init_logger();
    let num = cheb![1.0, -2.0, 0.5, 3.0];
    let den = cheb![0.25, 2.0];
    let (q, r) = num.div_rem(&den).unwrap();
    assert_eq!(q.degree(), 2);
    assert!(r.degree() <= 0);
    let back = (den * q + r).to_vec();
    assert!(check_close(&back, &num.to_vec(), 1E-14), "{back:?}");
}

#[test]
fn clenshaw_matches_direct_sum() {
    let mut rng = Rng::with_seed(1);
    let mut coeffs = RandStreamR64::new(rng.u64(..), -5.0, 5.0);
    let mut points = RandStreamR64::new(rng.u64(..), -1.0, 1.0);
    for _ in 0..500 {
        let cs = rand_coeffs(&mut coeffs, &mut rng, 20);
        let c = ChebPoly::from_coeffs(cs.clone());
        let x = points.next().unwrap();
        let direct: f64 = cs
            .iter()
            .enumerate()
            .map(|(k, ck)| ck * chebyshev_t(k, x))
            .sum();
        let y = c.eval(x).unwrap();
        assert!((y - direct).abs() < 1E-11, "{y} != {direct} at {x}");
    }
}

#[test]
fn product_identity() {
    let mut rng = Rng::with_seed(2);
    let mut coeffs = RandStreamR64::new(rng.u64(..), -2.0, 2.0);
    let mut points = RandStreamR64::new(rng.u64(..), -1.0, 1.0);
    for _ in 0..200 {
        let a = rand_coeffs(&mut coeffs, &mut rng, 8);
        let b = rand_coeffs(&mut coeffs, &mut rng, 8);
        let x = points.next().unwrap();

        let p = ChebPoly::from_coeffs(a.clone());
        let q = ChebPoly::from_coeffs(b.clone());
        let lhs = p.try_mul(&q).unwrap().eval(x).unwrap();
        let rhs = p.eval(x).unwrap() * q.eval(x).unwrap();
        assert!((lhs - rhs).abs() < 1E-10);

        let (p, q) = (Poly64::from_coeffs(a), Poly64::from_coeffs(b));
        let lhs = (&p * &q).eval(x).unwrap();
        let rhs = p.eval(x).unwrap() * q.eval(x).unwrap();
        assert!((lhs - rhs).abs() < 1E-10);
    }
}

#[test]
fn division_identity() {
    init_logger();
    let mut rng = Rng::with_seed(3);
    let mut coeffs = RandStreamR64::new(rng.u64(..), 0.5, 2.0);
    for _ in 0..200 {
        let n = rand_coeffs(&mut coeffs, &mut rng, 10);
        let d = rand_coeffs(&mut coeffs, &mut rng, 5);

        let num = ChebPoly::from_coeffs(n.clone());
        let den = ChebPoly::from_coeffs(d.clone());
        let (q, r) = num.div_rem(&den).unwrap();
        assert!(r.degree() < den.degree());
        let back = den.try_mul(&q).unwrap().try_add(&r).unwrap();
        assert!(check_close(&back.to_vec(), &num.to_vec(), 1E-8));

        let (num, den) = (Poly64::from_coeffs(n), Poly64::from_coeffs(d));
        let (q, r) = num.div_rem(&den).unwrap();
        assert!(r.degree() < den.degree());
        let back = &den * &q + r;
        assert!(check_close(&back.to_vec(), &num.to_vec(), 1E-8));
    }
}

#[test]
fn calculus_round_trip() {
    let mut rng = Rng::with_seed(4);
    let mut coeffs = RandStreamR64::new(rng.u64(..), -3.0, 3.0);
    for _ in 0..200 {
        let cs = rand_coeffs(&mut coeffs, &mut rng, 12);

        let p = Poly64::from_coeffs(cs.clone());
        let back = p.derivative().unwrap().integrate().unwrap();
        let expected = p.sub_scalar(cs[0]);
        assert!(check_close(&back.to_vec(), &expected.to_vec(), 1E-10));

        // the T_0 coefficient of the integral is 0, compare everything above it
        let c = ChebPoly::from_coeffs(cs);
        let back = c.derivative().unwrap().integrate().unwrap().to_vec();
        let expected = c.to_vec();
        let skip = |v: &[f64]| v.iter().skip(1).copied().collect::<Vec<_>>();
        assert!(check_close(&skip(&back), &skip(&expected), 1E-9));
    }
}

#[test]
fn roots_of_random_real_polynomials() {
    init_logger();
    let mut rng = Rng::with_seed(5);
    let mut stream = RandStreamR64::new(rng.u64(..), -1.0, 1.0);
    for deg in 1..=6 {
        for _ in 0..20 {
            let mut expected = stream.take_vec(deg);
            let p = ChebPoly::from_roots(&expected);
            let roots = p.roots().unwrap();
            expected.sort_by(f64::total_cmp);
            let actual: Vec<f64> = roots.iter().map(|z| z.re).collect();
            assert!(
                check_close(&actual, &expected, 1E-5),
                "{actual:?} != {expected:?}"
            );

            let p = Poly64::from_roots(&expected);
            let actual: Vec<f64> = p.roots().unwrap().iter().map(|z| z.re).collect();
            assert!(check_close(&actual, &expected, 1E-5));
        }
    }
}

#[test]
fn roots_of_complex_polynomial() {
    let expected = [
        Complex64::new(-1.0, 0.5),
        Complex64::new(0.25, -2.0),
        Complex64::new(3.0, 0.0),
    ];
    let p = polybasis::Poly::from_roots(&expected);
    let roots = p.roots().unwrap();
    for (a, e) in roots.iter().zip(&expected) {
        assert!((a - e).norm() < 1E-10);
    }
}

#[test]
fn shapes_interoperate() {
    let dense = poly![1.0, 0.0, 0.0, 0.0, 2.0];
    let sparse = SparsePoly::from_terms([(0, 1.0), (4, 2.0)]);
    assert_eq!(dense, sparse);
    assert_eq!(dense.eval(2.0).unwrap(), sparse.eval(2.0).unwrap());

    let frozen = dense.freeze().unwrap();
    let sum = frozen.try_add(&sparse).unwrap();
    assert_eq!(sum, poly![2.0, 0.0, 0.0, 0.0, 4.0]);

    // x^-1 + 1 evaluated at 4
    let laurent = LaurentPoly::from_run(-1, vec![1.0, 1.0]);
    assert_eq!(laurent.eval(4.0).unwrap(), 1.25);
    let d = laurent.derivative().unwrap();
    assert_eq!(d.first_index(), -2);
    assert_eq!(d.coeff(-2).unwrap(), -1.0);
}

#[test]
fn fit_noisy_samples() {
    let mut noise = RandStreamR64::new(6, -1E-6, 1E-6);
    let p = cheb![0.5, -1.0, 0.25, 2.0];
    let xs: Vec<f64> = (0..50).map(|i| f64::from(i) / 49.0 * 2.0 - 1.0).collect();
    let ys: Vec<f64> = xs
        .iter()
        .map(|x| p.eval(*x).unwrap() + noise.next().unwrap())
        .collect();
    let q = ChebPoly::fit(&xs, &ys, 3).unwrap();
    assert!(check_close(&q.to_vec(), &p.to_vec(), 1E-5));
}
