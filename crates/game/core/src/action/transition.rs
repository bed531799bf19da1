use crate::env::CatalogEnv;
use crate::state::Character;

/// Defines how a concrete action variant mutates character state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. All hooks
/// receive read-only access to catalog facts via the environment and must
/// stay side-effect free.
///
/// Every precondition belongs in `pre_validate`: once it passes, `apply`
/// must not fail partway through a mutation, so rejected actions always
/// leave the state untouched.
pub trait ActionTransition {
    type Error;
    type Outcome;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(
        &self,
        _state: &Character,
        _env: &CatalogEnv<'_>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the character directly. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut Character, env: &CatalogEnv<'_>)
    -> Result<Self::Outcome, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(
        &self,
        _state: &Character,
        _env: &CatalogEnv<'_>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
