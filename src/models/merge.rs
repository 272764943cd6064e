/// Shallow merge of a section configuration with caller overrides.
///
/// Every field present in the overrides replaces the corresponding field
/// wholesale; lists are not merged element-wise.
pub trait Merge: Default + Sized {
    type Overrides: Default;

    fn merge(self, overrides: Self::Overrides) -> Self;

    fn with_overrides(overrides: Self::Overrides) -> Self {
        Self::default().merge(overrides)
    }
}
