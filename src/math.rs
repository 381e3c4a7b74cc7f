use ndarray::linalg::kron;
use ndarray::{Array2, LinalgScalar, s};
use num_complex::Complex;
use num_traits::Zero;

/// 二维旋转矩阵 $\begin{pmatrix}\cos\phi&-\sin\phi\\\\ \sin\phi&\cos\phi\end{pmatrix}$
pub fn rot_mat(phi: f64) -> Array2<f64> {
    let (s, c) = phi.sin_cos();
    ndarray::array![[c, -s], [s, c]]
}

/// Block-diagonal stacking; empty blocks are allowed and only shift the offsets.
pub fn block_diag<T: Clone + Zero>(blocks: &[Array2<T>]) -> Array2<T> {
    let nrows = blocks.iter().map(|b| b.nrows()).sum();
    let ncols = blocks.iter().map(|b| b.ncols()).sum();
    let mut out = Array2::<T>::zeros((nrows, ncols));
    let (mut r, mut c) = (0, 0);
    for b in blocks {
        out.slice_mut(s![r..r + b.nrows(), c..c + b.ncols()]).assign(b);
        r += b.nrows();
        c += b.ncols();
    }
    out
}

/// $\mathbb{1}_2\otimes A$, the spin doubling of a spinless block.
pub fn spin_double<T: LinalgScalar>(a: &Array2<T>) -> Array2<T> {
    kron(&Array2::<T>::eye(2), a)
}

pub fn to_complex(a: &Array2<f64>) -> Array2<Complex<f64>> {
    a.mapv(|x| Complex::new(x, 0.0))
}

/// Largest absolute entry of `a - b`.
pub fn max_diff(a: &Array2<Complex<f64>>, b: &Array2<Complex<f64>>) -> f64 {
    (a - b).iter().fold(0.0, |m, x| m.max(x.norm()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_block_diag() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[5.0]];
        let empty = Array2::<f64>::zeros((0, 2));
        let out = block_diag(&[a, empty, b]);
        assert_eq!(
            out,
            array![
                [1.0, 2.0, 0.0, 0.0, 0.0],
                [3.0, 4.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 0.0, 5.0]
            ]
        );
    }

    #[test]
    fn test_rotation_commutes_with_itself() {
        let u = rot_mat(1.1);
        let v = rot_mat(-0.4);
        assert!((u.dot(&v) - v.dot(&u)).iter().all(|x| x.abs() < 1e-14));
        assert!((u.dot(&v) - rot_mat(0.7)).iter().all(|x| x.abs() < 1e-14));
        assert!((u.dot(&u.t()) - Array2::<f64>::eye(2)).iter().all(|x| x.abs() < 1e-14));
    }

    #[test]
    fn test_spin_double() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let d = spin_double(&a);
        assert_eq!(d.dim(), (4, 4));
        assert_eq!(d.slice(s![2..4, 2..4]), a);
        assert!(d.slice(s![0..2, 2..4]).iter().all(|x| *x == 0.0));
    }
}
