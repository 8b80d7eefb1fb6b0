#![feature(test)]
extern crate test;

extern crate polyideal;

use test::Bencher;

use polyideal::poly::raw::finitefield::FiniteField;
use polyideal::poly::raw::fraction::Fraction;
use polyideal::poly::raw::{groebner_basis, MonomialOrder, MultivariatePolynomial, UnivariatePolynomial};

type F = FiniteField<1073741789>;

fn dense(len: usize, seed: u64) -> UnivariatePolynomial<F> {
    let mut x = seed;
    UnivariatePolynomial::representative(
        (0..len)
            .map(|_| {
                x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                F::new(x >> 33)
            })
            .collect(),
    )
}

#[bench]
fn convolution_64(b: &mut Bencher) {
    let (p, q) = (dense(64, 1), dense(64, 2));
    b.iter(|| p.mul_convolution(&q));
}

#[bench]
fn karatsuba_64(b: &mut Bencher) {
    let (p, q) = (dense(64, 1), dense(64, 2));
    b.iter(|| p.mul_karatsuba(&q));
}

#[bench]
fn convolution_512(b: &mut Bencher) {
    let (p, q) = (dense(512, 1), dense(512, 2));
    b.iter(|| p.mul_convolution(&q));
}

#[bench]
fn karatsuba_512(b: &mut Bencher) {
    let (p, q) = (dense(512, 1), dense(512, 2));
    b.iter(|| p.mul_karatsuba(&q));
}

#[bench]
fn groebner_cyclic3(b: &mut Bencher) {
    let one = Fraction::from(1);
    let poly = |terms: &[[u32; 3]], c: i64| {
        let mut p = MultivariatePolynomial::with_nvars(3);
        for t in terms {
            p.append_monomial(one.clone(), t.to_vec());
        }
        if c != 0 {
            p.append_monomial(Fraction::from(c), vec![0, 0, 0]);
        }
        p
    };

    // x + y + z, xy + yz + zx, xyz - 1
    let system = vec![
        poly(&[[1, 0, 0], [0, 1, 0], [0, 0, 1]], 0),
        poly(&[[1, 1, 0], [0, 1, 1], [1, 0, 1]], 0),
        poly(&[[1, 1, 1]], -1),
    ];
    b.iter(|| groebner_basis(&system, MonomialOrder::Lex));
}
