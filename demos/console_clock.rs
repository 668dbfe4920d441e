//! Desktop demo: a two-chip counter rendered to the terminal.
//!
//! Run with: `cargo run --example console_clock`
//!
//! Uses the simulated chain from `hal::FakeChain`, so no hardware is needed.
//! Each tick a writer callback composes the text and the scheduler flushes
//! it through the chain protocol; the terminal shows what the chips latched.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use rs_max7219::{hal::FakeChain, DisplayConfig, Max7219, Poller};

/// Draws 7-segment patterns as three lines of ASCII art.
fn draw(patterns: &[u8]) -> [String; 3] {
    let mut lines = [String::new(), String::new(), String::new()];
    for &p in patterns {
        let seg = |bit: u8, on: char| if p & (1 << bit) != 0 { on } else { ' ' };
        // bit 6 = A, 5 = B, 4 = C, 3 = D, 2 = E, 1 = F, 0 = G, 7 = DP
        lines[0].push(' ');
        lines[0].push(seg(6, '_'));
        lines[0].push(' ');
        lines[0].push(' ');
        lines[1].push(seg(1, '|'));
        lines[1].push(seg(0, '_'));
        lines[1].push(seg(5, '|'));
        lines[1].push(' ');
        lines[2].push(seg(2, '|'));
        lines[2].push(seg(3, '_'));
        lines[2].push(seg(4, '|'));
        lines[2].push(seg(7, '.'));
    }
    lines
}

fn main() -> anyhow::Result<()> {
    let config = DisplayConfig::default()
        .with_num_chips(2)
        .with_intensity(8)
        .with_update_interval_ms(200);

    let mut display = Max7219::from_config(FakeChain::new(config.num_chips), &config);

    let start = Instant::now();
    display.set_writer(move |d| {
        let elapsed = start.elapsed().as_secs_f32();
        d.clear();
        let next = d.print("t");
        d.printf_at(next + 1, format_args!("{:>6.1}", elapsed));
        d.printf_at(8, format_args!("{:>8}", (elapsed * 5.0) as u32));
    });

    let mut poller = Poller::new(display);
    let clock = Instant::now();

    println!("rs-max7219 console demo");
    println!("\n\n");

    for _ in 0..50 {
        let ticked = poller.poll(&clock).context("display update failed")?;

        if ticked {
            let visible = poller.component().bus().visible();
            // Move the cursor back over the previous frame
            print!("\x1b[3A\r");
            for line in draw(&visible) {
                println!("{line}");
            }
        }

        thread::sleep(Duration::from_millis(20));
    }

    Ok(())
}
