//! LU decomposition solver
//!
//! Crout LU factorization with implicit row scaling and partial pivoting for
//! small dense systems, followed by forward/backward substitution.
//!
//! # Buffer ownership
//!
//! [`lu_decompose_in_place`] and [`solve_in_place`] take exclusive write
//! access to the caller's matrix for the duration of the call. **On return
//! the buffer no longer holds the original coefficients**: it holds the
//! combined L/U factors (L is unit lower triangular, stored below the
//! diagonal; U is stored on and above it). Callers that still need the
//! original matrix must pass a copy, or use [`lu_solve`], which copies for
//! them. If decomposition fails the buffer contents are unspecified.

use crate::config::{LuConfig, PivotPolicy};
use crate::error::{Result, SolverError};
use crate::traits::RealField;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Pivot bookkeeping produced by one decomposition
///
/// Only meaningful together with the L/U buffer it was produced with.
#[derive(Debug, Clone, PartialEq)]
pub struct LuFactors<T: RealField> {
    /// `permutation[j]` is the row exchanged with row `j` at step `j`
    permutation: Vec<usize>,
    /// +1 or -1 depending on the number of row exchanges
    parity: T,
}

impl<T: RealField> LuFactors<T> {
    /// Row exchanged at each elimination step
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Determinant sign factor (+1 or -1)
    pub fn parity(&self) -> T {
        self.parity
    }

    /// System dimension
    pub fn dim(&self) -> usize {
        self.permutation.len()
    }

    /// Number of row exchanges performed during decomposition
    pub fn swap_count(&self) -> usize {
        self.permutation
            .iter()
            .enumerate()
            .filter(|&(j, &p)| j != p)
            .count()
    }

    /// Solve `A x = b` given the L/U buffer `lu` produced together with these factors
    ///
    /// The right-hand side is copied into a fresh output vector, which is only
    /// returned on success.
    pub fn substitute(&self, lu: ArrayView2<'_, T>, b: ArrayView1<'_, T>) -> Result<Array1<T>> {
        let n = self.dim();
        self.check_compatible(&lu)?;
        if b.len() != n {
            return Err(SolverError::DimensionMismatch {
                expected: n,
                got: b.len(),
            });
        }

        let mut x = b.to_owned();

        // Forward substitution with unit-diagonal L, unscrambling the
        // permutation as we go. Leading zeros of Pb contribute nothing, so the
        // inner loop starts at the first nonzero entry.
        let mut first_nonzero: Option<usize> = None;
        for i in 0..n {
            let ip = self.permutation[i];
            let mut sum = x[ip];
            x[ip] = x[i];
            if let Some(start) = first_nonzero {
                for j in start..i {
                    sum -= lu[[i, j]] * x[j];
                }
            } else if sum != T::zero() {
                first_nonzero = Some(i);
            }
            x[i] = sum;
        }

        // Backward substitution with U
        for i in (0..n).rev() {
            let mut sum = x[i];
            for j in (i + 1)..n {
                sum -= lu[[i, j]] * x[j];
            }
            x[i] = sum / lu[[i, i]];
        }

        Ok(x)
    }

    /// Determinant of the original matrix from the L/U buffer
    ///
    /// Under [`PivotPolicy::SubstituteEpsilon`] a matrix that only became
    /// singular during elimination reports a tiny nonzero determinant, since
    /// the zero pivot was replaced by epsilon.
    pub fn determinant(&self, lu: ArrayView2<'_, T>) -> Result<T> {
        self.check_compatible(&lu)?;
        Ok(self.signed_diagonal_product(&lu))
    }

    fn signed_diagonal_product(&self, lu: &ArrayView2<'_, T>) -> T {
        lu.diag().iter().fold(self.parity, |acc, &d| acc * d)
    }

    fn check_compatible(&self, lu: &ArrayView2<'_, T>) -> Result<()> {
        let n = self.dim();
        let (rows, cols) = lu.dim();
        if rows != cols {
            return Err(SolverError::NotSquare { rows, cols });
        }
        if rows != n {
            return Err(SolverError::DimensionMismatch {
                expected: n,
                got: rows,
            });
        }
        if let Some(&index) = self.permutation.iter().find(|&&p| p >= n) {
            return Err(SolverError::InvalidPermutation { index, len: n });
        }
        Ok(())
    }
}

/// Factor `a` in place into combined L/U form
///
/// See the module documentation for the buffer contract. Fails with
/// [`SolverError::SingularMatrix`] before touching the buffer if any row is
/// entirely zero.
pub fn lu_decompose_in_place<T: RealField>(
    a: &mut Array2<T>,
    config: &LuConfig,
) -> Result<LuFactors<T>> {
    let n = check_square(a)?;

    log::debug!(
        "LU decomposition of {}x{} matrix ({:?})",
        n,
        n,
        config.pivot_policy
    );

    // Implicit scaling: reciprocal of each row's largest magnitude
    let mut scale = Vec::with_capacity(n);
    for (i, row) in a.outer_iter().enumerate() {
        let big = row.iter().fold(T::zero(), |m, &v| m.max(v.abs()));
        if big == T::zero() {
            return Err(SolverError::SingularMatrix { row: i });
        }
        scale.push(T::one() / big);
    }

    let mut permutation = vec![0usize; n];
    let mut parity = T::one();

    for j in 0..n {
        // Upper part of column j (Crout)
        for i in 0..j {
            let mut sum = a[[i, j]];
            for k in 0..i {
                sum -= a[[i, k]] * a[[k, j]];
            }
            a[[i, j]] = sum;
        }

        // Diagonal and lower part, tracking the best scaled pivot
        let mut big = T::zero();
        let mut imax = j;
        for i in j..n {
            let mut sum = a[[i, j]];
            for k in 0..j {
                sum -= a[[i, k]] * a[[k, j]];
            }
            a[[i, j]] = sum;
            let candidate = scale[i] * sum.abs();
            if candidate >= big {
                big = candidate;
                imax = i;
            }
        }

        if imax != j {
            for k in 0..n {
                a.swap([imax, k], [j, k]);
            }
            parity = -parity;
            scale[imax] = scale[j];
            log::debug!("LU step {}: exchanged rows {} and {}", j, j, imax);
        }
        permutation[j] = imax;

        let pivot = a[[j, j]];
        match config.pivot_policy {
            PivotPolicy::SubstituteEpsilon => {
                if pivot == T::zero() {
                    log::warn!(
                        "LU step {}: zero pivot replaced by epsilon, result may be meaningless",
                        j
                    );
                    a[[j, j]] = T::pivot_substitute();
                }
            }
            PivotPolicy::Strict { tolerance } => {
                if pivot == T::zero()
                    || pivot.is_nan()
                    || pivot.abs() <= T::from_tolerance(tolerance)
                {
                    return Err(SolverError::ZeroPivot {
                        column: j,
                        value: pivot.to_f64_lossy(),
                    });
                }
            }
        }

        if j + 1 != n {
            let inv = T::one() / a[[j, j]];
            for i in (j + 1)..n {
                a[[i, j]] *= inv;
            }
        }
    }

    Ok(LuFactors {
        permutation,
        parity,
    })
}

/// Solve `A x = b`, decomposing `a` in place with the default configuration
///
/// `a` is left holding its L/U factors; `b` is not modified.
pub fn solve_in_place<T: RealField>(a: &mut Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    solve_in_place_with_config(a, b, &LuConfig::default())
}

/// Solve `A x = b`, decomposing `a` in place with an explicit configuration
pub fn solve_in_place_with_config<T: RealField>(
    a: &mut Array2<T>,
    b: &Array1<T>,
    config: &LuConfig,
) -> Result<Array1<T>> {
    let n = check_square(a)?;
    if b.len() != n {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    let factors = lu_decompose_in_place(a, config)?;
    factors.substitute(a.view(), b.view())
}

/// Solve `A x = b` without touching `a`
///
/// This is a convenience function that copies the matrix, then factors and
/// solves.
pub fn lu_solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    let mut work = a.clone();
    solve_in_place(&mut work, b)
}

/// LU factorization that owns its buffer
///
/// Factor once, then solve for as many right-hand sides as needed.
#[derive(Debug, Clone)]
pub struct LuDecomposition<T: RealField> {
    lu: Array2<T>,
    factors: LuFactors<T>,
}

impl<T: RealField> LuDecomposition<T> {
    /// Factor `a` with the default (epsilon-substituting) configuration
    pub fn new(a: Array2<T>) -> Result<Self> {
        Self::with_config(a, &LuConfig::default())
    }

    /// Factor `a` with an explicit configuration
    pub fn with_config(mut a: Array2<T>, config: &LuConfig) -> Result<Self> {
        let factors = lu_decompose_in_place(&mut a, config)?;
        Ok(Self { lu: a, factors })
    }

    /// Solve `A x = b` using the pre-computed factors
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        self.factors.substitute(self.lu.view(), b.view())
    }

    /// Determinant of the factored matrix
    ///
    /// See [`LuFactors::determinant`] for the epsilon-substitution caveat.
    pub fn determinant(&self) -> T {
        self.factors.signed_diagonal_product(&self.lu.view())
    }

    /// Determinant sign factor (+1 or -1)
    pub fn parity(&self) -> T {
        self.factors.parity
    }

    /// Row exchanged at each elimination step
    pub fn permutation(&self) -> &[usize] {
        self.factors.permutation()
    }

    /// Pivot bookkeeping
    pub fn factors(&self) -> &LuFactors<T> {
        &self.factors
    }

    /// Combined L/U buffer
    pub fn lu(&self) -> &Array2<T> {
        &self.lu
    }

    /// System dimension
    pub fn dim(&self) -> usize {
        self.factors.dim()
    }

    /// Split the combined buffer into explicit L (unit diagonal) and U
    pub fn unpack(&self) -> (Array2<T>, Array2<T>) {
        let n = self.dim();
        let mut l = Array2::<T>::eye(n);
        let mut u = Array2::<T>::zeros((n, n));
        for i in 0..n {
            for j in 0..n {
                if j < i {
                    l[[i, j]] = self.lu[[i, j]];
                } else {
                    u[[i, j]] = self.lu[[i, j]];
                }
            }
        }
        (l, u)
    }

    /// Apply the recorded row exchanges to `m`, giving `P m`
    pub fn permute_rows(&self, m: &Array2<T>) -> Result<Array2<T>> {
        let n = self.dim();
        if m.nrows() != n {
            return Err(SolverError::DimensionMismatch {
                expected: n,
                got: m.nrows(),
            });
        }
        let mut out = m.clone();
        for (j, &p) in self.factors.permutation.iter().enumerate() {
            if p != j {
                for k in 0..out.ncols() {
                    out.swap([j, k], [p, k]);
                }
            }
        }
        Ok(out)
    }

    /// Give the L/U buffer back to the caller
    pub fn into_inner(self) -> Array2<T> {
        self.lu
    }
}

fn check_square<T>(a: &Array2<T>) -> Result<usize> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(SolverError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(SolverError::EmptyMatrix);
    }
    Ok(rows)
}
