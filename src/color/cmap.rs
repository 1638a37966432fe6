use super::{Color, BLUE, GREEN, GREY, MAGENTA, RED, WHITE, YELLOW};

/// The number of table entries, one per tempo starting at 0 BPM
pub const MAX_BPM: usize = 256;

/// Narrow a formula result into a channel value, saturating at both ends.
fn channel(value: i32) -> u8 {
    value.clamp(0, u8::MAX as i32) as u8
}

fn rgb(r: i32, g: i32, b: i32) -> Color {
    Color::new(channel(r), channel(g), channel(b))
}

/// The backlight color for a tempo.
///
/// Slow tempos are red and we "blue shift" as they get faster: red fades into
/// green, green into blue, and blue picks red back up on the way to violet. A
/// short white-ish ramp follows, and the last ten tempos are fixed marker
/// colors (plaid).
///
/// Returns `None` for tempos past the end of the table.
pub fn bpm_color(bpm: usize) -> Option<Color> {
    let ramp = |start: usize| 4 * (bpm as i32 - start as i32);

    let color = match bpm {
        0..=59 => rgb(ramp(0), 0, 0),
        60..=119 => rgb(240 - ramp(60), ramp(60), 0),
        120..=179 => rgb(0, 240 - ramp(120), ramp(120)),
        180..=239 => rgb(ramp(180), 0, 240),
        240..=245 => rgb(240, 40 * (bpm as i32 - 239), 240),
        246 => RED,
        247 => BLUE,
        248 => GREEN,
        249 => WHITE,
        250 => YELLOW,
        251 => MAGENTA,
        252 => GREY,
        253 => RED,
        254 => GREEN,
        255 => BLUE,
        _ => return None,
    };

    Some(color)
}

/// Backlight colors indexed by BPM.
#[derive(Debug, Clone)]
pub struct ColorTable {
    colors: Vec<Color>,
}

impl ColorTable {
    pub fn build() -> ColorTable {
        ColorTable::build_to(MAX_BPM)
    }

    /// Builds the table over `0..end`. Tempos without a color are left out.
    pub fn build_to(end: usize) -> ColorTable {
        let mut colors = Vec::with_capacity(end.min(MAX_BPM));

        for bpm in 0..end {
            if let Some(color) = bpm_color(bpm) {
                log::trace!("{}: {} {} {}", bpm, color.r, color.g, color.b);
                colors.push(color);
            }
        }

        log::debug!("Built color table with {} entries", colors.len());

        ColorTable { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Entries paired with their BPM, slowest first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Color)> + '_ {
        self.colors.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(bpm: usize) -> Color {
        bpm_color(bpm).unwrap()
    }

    #[test]
    fn slow_tempos_ramp_up_red() {
        for bpm in 0..60 {
            assert_eq!(color(bpm), Color::new(4 * bpm as u8, 0, 0), "bpm {}", bpm);
        }
        assert_eq!(color(0), Color::new(0, 0, 0));
    }

    #[test]
    fn band_edges() {
        assert_eq!(color(59), Color::new(236, 0, 0));
        assert_eq!(color(60), Color::new(240, 0, 0));
        assert_eq!(color(119), Color::new(4, 236, 0));
        assert_eq!(color(120), Color::new(0, 240, 0));
        assert_eq!(color(179), Color::new(0, 4, 236));
        assert_eq!(color(180), Color::new(0, 0, 240));
        assert_eq!(color(239), Color::new(236, 0, 240));
    }

    #[test]
    fn white_ramp() {
        assert_eq!(color(240), Color::new(240, 40, 240));
        assert_eq!(color(243), Color::new(240, 160, 240));
        assert_eq!(color(245), Color::new(240, 240, 240));
    }

    #[test]
    fn marker_colors() {
        let expected = [
            (246, (255, 0, 0)),
            (247, (0, 0, 255)),
            (248, (0, 255, 0)),
            (249, (255, 255, 255)),
            (250, (255, 255, 0)),
            (251, (255, 0, 255)),
            (252, (150, 150, 150)),
            (253, (255, 0, 0)),
            (254, (0, 255, 0)),
            (255, (0, 0, 255)),
        ];

        for &(bpm, (r, g, b)) in expected.iter() {
            assert_eq!(color(bpm), Color::new(r, g, b), "bpm {}", bpm);
        }
    }

    #[test]
    fn past_the_end_has_no_color() {
        assert_eq!(bpm_color(MAX_BPM), None);
        assert_eq!(bpm_color(1000), None);
    }

    #[test]
    fn channel_saturates() {
        assert_eq!(channel(-4), 0);
        assert_eq!(channel(255), 255);
        assert_eq!(channel(280), 255);
    }

    #[test]
    fn table_has_one_entry_per_bpm() {
        let table = ColorTable::build();

        assert_eq!(table.len(), MAX_BPM);
        for (bpm, c) in table.iter() {
            assert_eq!(Some(c), bpm_color(bpm));
        }
        assert_eq!(table.iter().last(), Some((255, BLUE)));
    }

    #[test]
    fn tempos_without_a_color_are_skipped() {
        let table = ColorTable::build_to(300);
        assert_eq!(table.len(), MAX_BPM);

        let table = ColorTable::build_to(10);
        assert_eq!(table.len(), 10);

        assert_eq!(ColorTable::build_to(0).len(), 0);
    }
}
