//! Domain Services
//!
//! Pure pipeline logic of the alint lab. No I/O happens here; the
//! application layer wires these steps to the vault and the model provider.

mod assembly;
mod bond_name;
mod normalizer;
mod prompt;
mod retry;
mod selector;
mod tokens;

pub use assembly::*;
pub use bond_name::*;
pub use normalizer::*;
pub use prompt::*;
pub use retry::*;
pub use selector::*;
pub use tokens::*;

/// Exact size of every generation result
pub const TARGET_ALINT_COUNT: usize = 19;

/// How many vault items a generation run asks the selector for
pub const VAULT_SHARE: usize = 8;

/// Upper bound on crystallized picks per selection, independent of `VAULT_SHARE`
pub const CRYSTALLIZED_PICK_CAP: usize = 4;

/// Model attempts per generation run
pub const MAX_GENERATION_ATTEMPTS: usize = 3;

/// Generic entries used when vault and model together fall short
pub const FALLBACK_ALINTS: [&str; 5] = [
    "Luminance - The soft glow that lingers after a shared laugh has faded",
    "Covalent Bond - Two souls sharing what neither could hold alone",
    "Stardust - The ancient matter that remembers every star it once belonged to",
    "Catalyst - The quiet presence that makes every reaction a little easier",
    "Moonstone - A calm light carried through the darkest part of the night",
];
