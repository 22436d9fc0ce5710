//! Round configuration options.

/// Default path of the policy table document.
pub const DEFAULT_POLICY_PATH: &str = "q_table.json";

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcoach::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_dealer_stand_threshold(17)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOptions {
    /// Total at which the dealer stops drawing.
    pub dealer_stand_threshold: u8,
    /// Whether the dealer stands on a soft total equal to the threshold.
    pub stand_on_soft_17: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            dealer_stand_threshold: 17,
            stand_on_soft_17: true,
        }
    }
}

impl RoundOptions {
    /// Sets the total at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcoach::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_dealer_stand_threshold(18);
    /// assert_eq!(options.dealer_stand_threshold, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stand_threshold(mut self, threshold: u8) -> Self {
        self.dealer_stand_threshold = threshold;
        self
    }

    /// Sets whether the dealer stands on a soft threshold total.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcoach::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_stand_on_soft_17(false);
    /// assert!(!options.stand_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }
}
