//! Parameter introspection for discoverable controls.
//!
//! A parameter is described by a [`ParamDescriptor`]: display names, range,
//! default, unit, slider scale and a stable [`ParamId`]. Types that
//! own a set of parameters implement [`ParameterInfo`] so the CLI, presets
//! and hosts can enumerate and set them by index, name or id.
//!
//! # Example
//!
//! ```rust
//! use ringcrush_core::{ParameterInfo, ParamDescriptor, ParamId};
//!
//! struct Blend {
//!     amount: f32,
//! }
//!
//! impl ParameterInfo for Blend {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::custom("Amount", "Amt", 0.0, 1.0, 0.0)
//!                 .with_id(ParamId(10), "amount")),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f32 {
//!         match index {
//!             0 => self.amount,
//!             _ => 0.0,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f32) {
//!         if index == 0 {
//!             self.amount = value.clamp(0.0, 1.0);
//!         }
//!     }
//! }
//!
//! let mut b = Blend { amount: 0.0 };
//! assert_eq!(b.find_param_by_name("amt"), Some(0));
//! b.set_param(0, 4.0);
//! assert_eq!(b.get_param(0), 1.0);
//! ```

/// How a control is laid out on a slider or automation lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamScale {
    /// Evenly spaced values (default).
    #[default]
    Linear,
    /// Evenly spaced ratios, for frequencies. Requires `min > 0.0`.
    Logarithmic,
}

/// Stable parameter identifier that survives reordering.
///
/// Once assigned, a `ParamId` never changes for a given parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags.
///
/// ```rust
/// use ringcrush_core::ParamFlags;
///
/// assert!(ParamFlags::default().contains(ParamFlags::AUTOMATABLE));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// Host can automate this parameter.
    pub const AUTOMATABLE: Self = Self(1 << 0);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Trait for types that expose introspectable parameters.
///
/// Parameters are accessed by zero-based index, stable for the lifetime of
/// the implementor. Implementations clamp in [`set_param`](Self::set_param)
/// and ignore out-of-range indices.
pub trait ParameterInfo {
    /// Number of parameters. Valid indices are `0..param_count()`.
    fn param_count(&self) -> usize;

    /// Descriptor for the parameter at `index`, or `None` if out of range.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Current value of the parameter at `index`; `0.0` if out of range.
    fn get_param(&self, index: usize) -> f32;

    /// Sets the parameter at `index`, clamped to its range.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches [`ParamDescriptor::name`], [`ParamDescriptor::short_name`]
    /// and [`ParamDescriptor::string_id`].
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        for i in 0..self.param_count() {
            if let Some(desc) = self.param_info(i)
                && (desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || desc.string_id.eq_ignore_ascii_case(name))
            {
                return Some(i);
            }
        }
        None
    }

    /// Stable [`ParamId`] for the parameter at `index`.
    fn param_id(&self, index: usize) -> Option<ParamId> {
        self.param_info(index).map(|d| d.id)
    }

    /// Finds a parameter index by its stable [`ParamId`]. O(n); setup paths only.
    fn param_index_by_id(&self, id: ParamId) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.id == id))
    }
}

/// Describes a single parameter's metadata for display and validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Carrier Frequency").
    pub name: &'static str,

    /// Short name for narrow displays, max 8 characters.
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value.
    pub min: f32,

    /// Maximum allowed value.
    pub max: f32,

    /// Value on initialization.
    pub default: f32,

    /// Recommended increment for encoder-style control. Informational only.
    pub step: f32,

    /// Stable numeric ID. Default: `ParamId(0)` (unassigned).
    pub id: ParamId,

    /// Stable string ID used as the persisted key in presets.
    pub string_id: &'static str,

    /// Normalization curve.
    pub scale: ParamScale,

    /// Capability flags.
    pub flags: ParamFlags,
}

impl ParamDescriptor {
    /// Dimensionless parameter with a custom name and range.
    pub const fn custom(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min,
            max,
            default,
            step: 0.01,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE,
        }
    }

    /// Frequency parameter in Hz on a logarithmic scale.
    pub const fn frequency_hz(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Hertz,
            min,
            max,
            default,
            step: 1.0,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Logarithmic,
            flags: ParamFlags::AUTOMATABLE,
        }
    }

    /// Sets the stable parameter ID and string ID.
    ///
    /// ```rust
    /// use ringcrush_core::{ParamDescriptor, ParamId};
    ///
    /// let desc = ParamDescriptor::custom("Gain", "Gain", 0.0, 0.7, 0.5)
    ///     .with_id(ParamId(100), "gain");
    /// assert_eq!(desc.id, ParamId(100));
    /// assert_eq!(desc.string_id, "gain");
    /// ```
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Sets the slider scale.
    pub const fn with_scale(mut self, scale: ParamScale) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the recommended step.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Clamps a value to this parameter's valid range.
    ///
    /// NaN maps to the default.
    ///
    /// ```rust
    /// use ringcrush_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::custom("Gain", "Gain", 0.0, 0.7, 0.5);
    /// assert_eq!(desc.clamp(0.3), 0.3);
    /// assert_eq!(desc.clamp(-1.0), 0.0);
    /// assert_eq!(desc.clamp(9.0), 0.7);
    /// assert_eq!(desc.clamp(f32::NAN), 0.5);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.default
        } else if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Unit type for parameter display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Hertz (Hz).
    Hertz,
    /// Dimensionless.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// ```rust
    /// use ringcrush_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Hertz.suffix(), " Hz");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Hertz => " Hz",
            ParamUnit::None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestParams {
        drive: f32,
        freq: f32,
    }

    impl TestParams {
        fn new() -> Self {
            Self {
                drive: 1.0,
                freq: 1000.0,
            }
        }
    }

    impl ParameterInfo for TestParams {
        fn param_count(&self) -> usize {
            2
        }

        fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
            match index {
                0 => Some(
                    ParamDescriptor::custom("Drive", "Drive", 0.1, 10.0, 1.0)
                        .with_id(ParamId(1), "drive"),
                ),
                1 => Some(
                    ParamDescriptor::frequency_hz("Frequency", "Freq", 20.0, 2000.0, 1000.0)
                        .with_id(ParamId(2), "freq"),
                ),
                _ => None,
            }
        }

        fn get_param(&self, index: usize) -> f32 {
            match index {
                0 => self.drive,
                1 => self.freq,
                _ => 0.0,
            }
        }

        fn set_param(&mut self, index: usize, value: f32) {
            match index {
                0 => {
                    if let Some(desc) = self.param_info(0) {
                        self.drive = desc.clamp(value);
                    }
                }
                1 => {
                    if let Some(desc) = self.param_info(1) {
                        self.freq = desc.clamp(value);
                    }
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_param_lookup() {
        let p = TestParams::new();
        assert_eq!(p.find_param_by_name("DRIVE"), Some(0));
        assert_eq!(p.find_param_by_name("freq"), Some(1));
        assert_eq!(p.find_param_by_name("nope"), None);
        assert_eq!(p.param_id(1), Some(ParamId(2)));
        assert_eq!(p.param_index_by_id(ParamId(2)), Some(1));
        assert_eq!(p.param_index_by_id(ParamId(99)), None);
    }

    #[test]
    fn test_param_clamping() {
        let mut p = TestParams::new();
        p.set_param(0, 100.0);
        assert_eq!(p.get_param(0), 10.0);
        p.set_param(0, 0.0);
        assert_eq!(p.get_param(0), 0.1);
        p.set_param(1, 5.0);
        assert_eq!(p.get_param(1), 20.0);
    }

    #[test]
    fn test_out_of_bounds_index() {
        let mut p = TestParams::new();
        assert_eq!(p.get_param(99), 0.0);
        p.set_param(99, 42.0);
        assert_eq!(p.get_param(0), 1.0);
        assert!(p.param_info(2).is_none());
    }

    #[test]
    fn test_contains() {
        let desc = ParamDescriptor::custom("R", "R", 0.0, 0.6, 0.6);
        assert!(desc.contains(0.0));
        assert!(desc.contains(0.6));
        assert!(!desc.contains(0.61));
        assert!(!desc.contains(f32::NAN));
    }

    #[test]
    fn test_builders() {
        let desc = ParamDescriptor::custom("Amt", "Amt", 0.0, 1.0, 0.0)
            .with_step(0.05)
            .with_scale(ParamScale::Logarithmic);
        assert_eq!(desc.unit, ParamUnit::None);
        assert_eq!(desc.step, 0.05);
        assert_eq!(desc.scale, ParamScale::Logarithmic);
        assert!(desc.flags.contains(ParamFlags::AUTOMATABLE));

        let freq = ParamDescriptor::frequency_hz("Freq", "Freq", 20.0, 2000.0, 440.0);
        assert_eq!(freq.unit, ParamUnit::Hertz);
        assert_eq!(freq.unit.suffix(), " Hz");
        assert_eq!(ParamFlags::default(), ParamFlags::AUTOMATABLE);
        assert!(!ParamFlags(0).contains(ParamFlags::AUTOMATABLE));
    }
}
