//! Deterministic random sources for trial simulation.

use std::cell::{RefCell, RefMut};

use hmac::{Hmac, Mac};
use rand::{SeedableRng, rngs::SmallRng};
use sha2::Sha256;

/// Deterministic bundle of RNG streams segregated by simulation domain.
#[derive(Debug, Clone)]
pub struct RngBundle {
    placement: RefCell<CountingRng<SmallRng>>,
    pick: RefCell<CountingRng<SmallRng>>,
    reveal: RefCell<CountingRng<SmallRng>>,
}

impl RngBundle {
    /// Construct the bundle from a user-visible seed.
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        let placement = CountingRng::new(derive_stream_seed(seed, b"placement"));
        let pick = CountingRng::new(derive_stream_seed(seed, b"pick"));
        let reveal = CountingRng::new(derive_stream_seed(seed, b"reveal"));
        Self {
            placement: RefCell::new(placement),
            pick: RefCell::new(pick),
            reveal: RefCell::new(reveal),
        }
    }

    /// Access the car placement RNG stream.
    #[must_use]
    pub fn placement(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.placement.borrow_mut()
    }

    /// Access the contestant pick RNG stream.
    #[must_use]
    pub fn pick(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.pick.borrow_mut()
    }

    /// Access the host reveal RNG stream.
    #[must_use]
    pub fn reveal(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.reveal.borrow_mut()
    }
}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl CountingRng<SmallRng> {
    fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl<R: rand::RngCore> CountingRng<R> {
    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: rand::RngCore> rand::RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()).expect("64-bit seed is valid key");
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let seed_bytes: [u8; 8] = digest[..8].try_into().expect("digest slice length");
    u64::from_le_bytes(seed_bytes)
}

/// Produce a seed from OS entropy for runs where the user supplied none.
#[must_use]
pub fn entropy_seed() -> u64 {
    rand::random::<u64>()
}
