//! PC-speaker and digitized sounds.
//!
//! Buzzer chunks are one byte per 140 Hz tick: a timer divider, where
//! divider `d` drives the speaker at `1193180 / (d * 60)` Hz and zero
//! is silence. Expansion renders them to 8-bit unsigned PCM through a
//! square-wave generator. Digitized sounds come out of the VSWAP pages
//! as raw 8-bit unsigned PCM at 7042 Hz.

use archive::VswapArchive;

use crate::AssetError;

/// Input clock of the PIT channel wired to the speaker.
pub const BUZZER_CLOCK: u32 = 1_193_180;

/// Ticks per second the game fed the speaker at.
pub const BUZZER_COMMAND_RATE: u32 = 140;

/// Sample rate of the digitized VSWAP sounds.
pub const SAMPLED_SOUND_RATE: u32 = 7042;

/// Square wave with adjustable frequency and duty cycle, producing
/// unsigned 8-bit samples. Phase carries across frequency changes so
/// consecutive tones join without clicks.
pub struct SquareWaveGenerator {
    sample_rate: u32,
    high: u8,
    low: u8,
    silence: u8,
    frequency: f64,
    duty_cycle: f64,
    round_period: bool,
    period_length: f64,
    phase_index: f64,
    threshold_index: f64,
}

impl SquareWaveGenerator {
    pub fn new(sample_rate: u32, high: u8, low: u8, silence: u8) -> Self {
        Self {
            sample_rate,
            high,
            low,
            silence,
            frequency: 0.0,
            duty_cycle: 0.5,
            round_period: true,
            period_length: 1.0,
            phase_index: 0.0,
            threshold_index: 0.5,
        }
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        if frequency == self.frequency {
            return;
        }
        let mut phase_index = self.phase_index;

        let period_length = if frequency > 0.0 {
            let mut period_length = self.sample_rate as f64 / frequency;
            phase_index *= period_length / self.period_length;
            if self.round_period {
                period_length = period_length.round();
                phase_index = phase_index.floor();
            }
            phase_index %= period_length;
            period_length
        } else {
            phase_index = 0.0;
            1.0
        };

        self.frequency = frequency;
        self.phase_index = phase_index;
        self.period_length = period_length;
        self.set_duty_cycle(self.duty_cycle);
    }

    pub fn set_duty_cycle(&mut self, duty_cycle: f64) {
        let mut threshold_index = self.period_length * duty_cycle;
        if self.round_period {
            threshold_index = threshold_index.round();
        }
        self.duty_cycle = duty_cycle;
        self.threshold_index = threshold_index;
    }

    /// Append `count` samples to `out`.
    pub fn render(&mut self, count: usize, out: &mut Vec<u8>) {
        if self.frequency > 1.0 {
            let mut phase_index = self.phase_index;
            for _ in 0..count {
                out.push(if phase_index < self.threshold_index {
                    self.high
                } else {
                    self.low
                });
                phase_index = (phase_index + 1.0) % self.period_length;
            }
            self.phase_index = phase_index;
        } else {
            // silence below 1 Hz
            out.extend(std::iter::repeat_n(self.silence, count));
        }
    }
}

/// Render a divider stream to PCM at `sample_rate`.
pub fn buzzer_expand(dividers: &[u8], sample_rate: u32) -> Vec<u8> {
    let mut generator = SquareWaveGenerator::new(sample_rate, 0xFF, 0x00, 0x80);
    let delay = sample_rate as f64 / BUZZER_COMMAND_RATE as f64;
    let mut out = Vec::with_capacity((dividers.len() as f64 * delay) as usize + 1);

    let mut offset = 0.0f64;
    let mut last: i32 = -1;
    for &divider in dividers {
        if i32::from(divider) != last {
            let frequency = if divider != 0 {
                BUZZER_CLOCK as f64 / (divider as f64 * 60.0)
            } else {
                0.0
            };
            generator.set_frequency(frequency);
        }
        last = i32::from(divider);

        let length = offset + delay;
        let whole = length.round();
        generator.render(whole as usize, &mut out);
        offset = length - whole;
    }
    out
}

/// Zero-order-hold upsampling; the factor must not shrink.
pub fn upsample_zoh(samples: &[u8], factor: f64) -> Result<Vec<u8>, AssetError> {
    if factor < 1.0 {
        return Err(AssetError::BadScale(factor));
    }
    let mut out = Vec::with_capacity((samples.len() as f64 * factor) as usize + 1);
    let mut remainder = 0.0f64;
    for &sample in samples {
        let times = factor + remainder;
        let whole = times.floor();
        out.extend(std::iter::repeat_n(sample, whole as usize));
        remainder = times - whole;
    }
    Ok(out)
}

/// A PC-speaker sound: the raw divider stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuzzerSound {
    pub dividers: Vec<u8>,
}

impl BuzzerSound {
    pub fn new(dividers: Vec<u8>) -> Self {
        Self { dividers }
    }

    pub fn len(&self) -> usize {
        self.dividers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dividers.is_empty()
    }

    pub fn to_samples(&self, sample_rate: u32) -> Vec<u8> {
        buzzer_expand(&self.dividers, sample_rate)
    }
}

/// A digitized sound pulled out of the VSWAP pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledSound {
    pub rate: u32,
    pub samples: Vec<u8>,
}

impl SampledSound {
    pub fn from_vswap(vswap: &VswapArchive, sound_index: usize) -> Result<Self, AssetError> {
        Ok(Self {
            rate: SAMPLED_SOUND_RATE,
            samples: vswap.sampled_sound(sound_index)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_below_one_hertz() {
        let mut generator = SquareWaveGenerator::new(44100, 0xFF, 0x00, 0x80);
        let mut out = Vec::new();
        generator.render(8, &mut out);
        assert_eq!(out, vec![0x80; 8]);
    }

    #[test]
    fn square_wave_alternates() {
        let mut generator = SquareWaveGenerator::new(8, 0xFF, 0x00, 0x80);
        // 2 Hz at 8 Hz sampling: period 4, duty 0.5 -> 2 high, 2 low
        generator.set_frequency(2.0);
        let mut out = Vec::new();
        generator.render(8, &mut out);
        assert_eq!(out, vec![0xFF, 0xFF, 0, 0, 0xFF, 0xFF, 0, 0]);
    }

    #[test]
    fn buzzer_output_length_tracks_command_rate() {
        // 140 ticks should render very close to one second
        let out = buzzer_expand(&[50; 140], 44100);
        assert!((out.len() as i64 - 44100).abs() <= 1, "{}", out.len());
    }

    #[test]
    fn buzzer_zero_divider_is_silence() {
        let out = buzzer_expand(&[0, 0], 1400);
        assert_eq!(out, vec![0x80; 20]);
    }

    #[test]
    fn upsample_repeats_samples() {
        let out = upsample_zoh(&[1, 2], 2.0).unwrap();
        assert_eq!(out, vec![1, 1, 2, 2]);
    }

    #[test]
    fn upsample_fractional_factor() {
        let out = upsample_zoh(&[1, 2, 3, 4], 1.5).unwrap();
        assert_eq!(out.len(), 6);
        assert_eq!(out, vec![1, 2, 2, 3, 4, 4]);
    }

    #[test]
    fn upsample_rejects_shrinking() {
        assert!(upsample_zoh(&[1], 0.5).is_err());
    }
}
