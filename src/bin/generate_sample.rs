//! Generate a synthetic player-stat table for demo runs.
//!
//! Writes `players.csv`: a header row plus one row per player, with built-in
//! correlations between the stat columns and a sprinkling of dirty data
//! (blank cells, `DNP` markers, short rows) so the report's row-skipping is
//! visible on real output.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let positions = ["PG", "SG", "SF", "PF", "C"];
    let n_players = 120;

    let output_path = "players.csv";
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(output_path)
        .expect("Failed to create output file");

    writer
        .write_record(["PLAYER", "POS", "AGE", "MPG", "PPG", "3P%", "FTA", "FT%"])
        .expect("Failed to write header");

    for i in 0..n_players {
        let pos = positions[(rng.next_u64() % positions.len() as u64) as usize];
        let age = rng.gauss(26.5, 4.0).clamp(19.0, 40.0).round();

        // Minutes dip a little for the oldest players, points track minutes.
        let mpg = rng.gauss(24.0 - 0.3 * (age - 26.5), 7.0).clamp(4.0, 38.0);
        let ppg = (0.55 * mpg + rng.gauss(0.0, 3.5)).clamp(0.5, 34.0);
        let three_pct = rng.gauss(0.355, 0.05).clamp(0.15, 0.50);
        let fta = (0.12 * ppg + rng.gauss(1.5, 1.2)).clamp(0.0, 11.0);
        // Heavy rim pressure tends to come with a slightly weaker stroke.
        let ft_pct = (rng.gauss(0.78, 0.07) - 0.005 * fta).clamp(0.40, 0.95);

        let player = format!("Player {:03}", i + 1);

        // Every so often, emit the kinds of dirt real exports contain.
        let record: Vec<String> = match rng.next_u64() % 20 {
            // Short row: trailing columns missing entirely.
            0 => vec![
                player,
                pos.to_string(),
                format!("{age:.0}"),
                format!("{mpg:.1}"),
            ],
            // Did-not-play marker instead of numbers.
            1 => vec![
                player,
                pos.to_string(),
                format!("{age:.0}"),
                "DNP".to_string(),
                "DNP".to_string(),
                String::new(),
                String::new(),
                String::new(),
            ],
            _ => vec![
                player,
                pos.to_string(),
                format!("{age:.0}"),
                format!("{mpg:.1}"),
                format!("{ppg:.1}"),
                format!("{three_pct:.3}"),
                format!("{fta:.1}"),
                format!("{ft_pct:.3}"),
            ],
        };
        writer.write_record(&record).expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_players} players to {output_path}");
}
