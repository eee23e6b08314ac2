// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Random sampling of vehicle properties.
use rand::{
    distributions::{Bernoulli, BernoulliError, Distribution, Standard},
    Rng,
};

use crate::vehicles::{Orientation, Step, VehicleKind};

impl Distribution<VehicleKind> for Standard {
    /// Cars and trucks are equally likely.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> VehicleKind {
        if rng.gen() {
            VehicleKind::Truck
        } else {
            VehicleKind::Car
        }
    }
}

impl Distribution<Step> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Step {
        if rng.gen() {
            Step::Forward
        } else {
            Step::Backward
        }
    }
}

/// Orientation distribution that favors one axis.
#[derive(Debug, Copy, Clone)]
pub struct OrientationBias {
    vertical: Bernoulli,
}

impl OrientationBias {
    /// Pick [`Orientation::Vertical`] with probability `vertical_probability`.
    pub fn new(vertical_probability: f64) -> Result<Self, BernoulliError> {
        Bernoulli::new(vertical_probability).map(|vertical| Self { vertical })
    }
}

impl Distribution<Orientation> for OrientationBias {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if self.vertical.sample(rng) {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn bias_extremes_are_fixed() {
        let mut rng = StdRng::seed_from_u64(3);
        let always = OrientationBias::new(1.0).unwrap();
        let never = OrientationBias::new(0.0).unwrap();
        for _ in 0..100 {
            assert_eq!(always.sample(&mut rng), Orientation::Vertical);
            assert_eq!(never.sample(&mut rng), Orientation::Horizontal);
        }
        assert!(OrientationBias::new(-0.1).is_err());
    }

    #[test]
    fn bias_leans_vertical() {
        let mut rng = StdRng::seed_from_u64(11);
        let bias = OrientationBias::new(0.7).unwrap();
        let vertical = (0..2000)
            .filter(|_| bias.sample(&mut rng) == Orientation::Vertical)
            .count();
        assert!((1200..1600).contains(&vertical), "{} vertical", vertical);
    }

    #[test]
    fn both_kinds_show_up() {
        let mut rng = StdRng::seed_from_u64(5);
        let kinds: Vec<VehicleKind> = (0..64).map(|_| rng.gen()).collect();
        assert!(kinds.contains(&VehicleKind::Car));
        assert!(kinds.contains(&VehicleKind::Truck));
    }
}
