use rand::Rng;

const SCRAMBLE_CHARS: &[char] = &[
	'!', '<', '>', '-', '_', '\\', '/', '[', ']', '{', '}', '—', '=', '+', '*', '^', '?', '#',
	'_', '_', '_', '_', '_', '_', '_', '_',
];
/// Upper bound (exclusive) for both the start delay and the scramble length.
const MAX_OFFSET: u32 = 40;
const REROLL_CHANCE: f64 = 0.28;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
	Settled(char),
	Scrambling(char),
}

#[derive(Clone, Debug)]
struct Slot {
	from: Option<char>,
	to: Option<char>,
	start: u32,
	end: u32,
	current: Option<char>,
}

/// One transition from a source string to a target string.
/// Restart by replacing the value.
#[derive(Clone, Debug)]
pub struct ScrambleState {
	slots: Vec<Slot>,
	frame: u32,
	done: bool,
}

fn random_char<R: Rng + ?Sized>(rng: &mut R) -> char {
	SCRAMBLE_CHARS[rng.gen_range(0..SCRAMBLE_CHARS.len())]
}

impl ScrambleState {
	pub fn new<R: Rng + ?Sized>(from: &str, to: &str, rng: &mut R) -> Self {
		let (from, to): (Vec<char>, Vec<char>) = (from.chars().collect(), to.chars().collect());
		let slots = (0..from.len().max(to.len()))
			.map(|i| {
				let start = rng.gen_range(0..MAX_OFFSET);
				Slot {
					from: from.get(i).copied(),
					to: to.get(i).copied(),
					start,
					end: start + rng.gen_range(0..MAX_OFFSET),
					current: None,
				}
			})
			.collect();
		Self {
			slots,
			frame: 0,
			done: false,
		}
	}

	/// Renders the current frame and moves to the next one.
	pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Glyph> {
		let frame = self.frame;
		let mut out = Vec::with_capacity(self.slots.len());
		let mut settled = 0;

		for slot in &mut self.slots {
			if frame >= slot.end {
				settled += 1;
				out.extend(slot.to.map(Glyph::Settled));
			} else if frame >= slot.start {
				if slot.current.is_none() || rng.r#gen::<f64>() < REROLL_CHANCE {
					slot.current = Some(random_char(rng));
				}
				out.extend(slot.current.map(Glyph::Scrambling));
			} else {
				out.extend(slot.from.map(Glyph::Settled));
			}
		}

		self.done = settled == self.slots.len();
		if !self.done {
			self.frame += 1;
		}
		out
	}

	pub fn is_complete(&self) -> bool {
		self.done
	}
}

/// Scrambles through a list of phrases, holding each one once it settles.
#[derive(Clone, Debug)]
pub struct PhraseCycle {
	phrases: Vec<String>,
	current: usize,
	state: ScrambleState,
	held: u32,
	hold_frames: u32,
}

impl PhraseCycle {
	pub fn new<R: Rng + ?Sized>(phrases: Vec<String>, hold_frames: u32, rng: &mut R) -> Self {
		let state = ScrambleState::new("", phrases.first().map_or("", String::as_str), rng);
		Self {
			phrases,
			current: 0,
			state,
			held: 0,
			hold_frames,
		}
	}

	pub fn phrase(&self) -> &str {
		self.phrases.get(self.current).map_or("", String::as_str)
	}

	/// Next frame's glyphs, or `None` while the settled text is on hold.
	pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Vec<Glyph>> {
		if self.state.is_complete() {
			if self.phrases.len() < 2 || self.held < self.hold_frames {
				self.held += 1;
				return None;
			}
			let next = (self.current + 1) % self.phrases.len();
			self.state = ScrambleState::new(&self.phrases[self.current], &self.phrases[next], rng);
			self.current = next;
			self.held = 0;
		}
		Some(self.state.advance(rng))
	}
}
