// scalargrad-core/src/nn/init.rs

use rand::Rng;
use rand_distr::StandardNormal;

/// Parameter-initialization scheme.
///
/// One value is drawn per parameter at construction time. The default is
/// a uniform draw on `[-1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform draw on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian draw with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Draws one parameter value from this scheme.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        match *self {
            Init::Uniform { low, high } => rng.gen_range(low..high),
            Init::Normal { mean, std } => {
                let z: f64 = rng.sample(StandardNormal);
                mean + std * z
            }
        }
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unit_uniform() {
        assert_eq!(
            Init::default(),
            Init::Uniform {
                low: -1.0,
                high: 1.0
            }
        );
    }

    #[test]
    fn test_uniform_samples_stay_in_range() {
        let mut rng = rand::thread_rng();
        let init = Init::Uniform {
            low: -0.5,
            high: 0.25,
        };
        for _ in 0..200 {
            let x = init.sample(&mut rng);
            assert!((-0.5..0.25).contains(&x), "sample {} out of range", x);
        }
    }

    #[test]
    fn test_normal_samples_are_finite_and_shifted() {
        let mut rng = rand::thread_rng();
        let init = Init::Normal {
            mean: 10.0,
            std: 0.01,
        };
        for _ in 0..200 {
            let x = init.sample(&mut rng);
            assert!(x.is_finite());
            // 0.01 std keeps draws within a wide band around the mean.
            assert!((9.0..11.0).contains(&x));
        }
    }
}
