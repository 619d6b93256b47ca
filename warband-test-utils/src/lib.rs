pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        fixtures::ProviderFixtures, test_setup_with_tables, test_setup_with_user_tables,
        TestError, TestSetup,
    };
}
