/// Fixed status enumeration of a record type
pub trait RecordStatus: Copy + PartialEq + Sized + 'static {
    /// Every variant in display order
    const ALL: &'static [Self];
    /// Labels of `ALL`, same order (used by form `one_of` rules)
    const LABELS: &'static [&'static str];

    fn label(&self) -> &'static str;

    /// Badge variant: "success", "warning", "error", "primary", "neutral"
    fn badge_variant(&self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.label() == label)
    }
}
