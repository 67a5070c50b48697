/// One tile of the showcase: an effect offered by the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectItem {
    pub name: String,
    pub description: String,
}

impl EffectItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// The application's effects in display order.
pub const EFFECTS: &[(&str, &str)] = &[
    ("Bass Boost", "Makes low frequencies more powerful"),
    ("Clarity", "Makes voices and instruments clearer"),
    ("Reverb", "Adds space and depth"),
    ("Soft Compression", "Evens out quiet and loud parts"),
    ("Stereo Widening", "Makes sound feel wider and more spacious"),
    ("Pitch", "High-quality pitch shift"),
    ("Simple EQ", "Adjust bass, middle, and treble"),
    ("10-Band EQ", "Fine-tune 10 frequency bands"),
    ("De-Mud", "Removes muddiness and boxiness"),
    ("Delay", "Repeating echoes and rhythmic delays"),
    ("Distortion", "Adds warmth, grit, and harmonic saturation"),
    ("Tremolo", "Pulsing volume modulation"),
    ("Chorus", "Thickens sound with lush modulation"),
    ("Phaser", "Swirling, sweeping movement"),
    ("Flanger", "Jet-like sweeping comb filter"),
    ("Bitcrusher", "Retro digital grit and crunch"),
    ("Tape Saturation", "Warm, smooth analog saturation"),
    ("Resampling", "Pitch and speed shift by resampling"),
];

pub fn default_catalog() -> Vec<EffectItem> {
    EFFECTS
        .iter()
        .map(|(name, description)| EffectItem::new(*name, *description))
        .collect()
}
