use crate::config::Config;
use crate::game::*;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;

/// Memory game exported to JavaScript.
///
/// The page owns the timers: call `tick()` from a `setInterval` of
/// `period_ms()`, and when `flip()` answers "mismatched" call `rollback()`
/// from a `setTimeout` of `delay_ms()`. Clear the interval on "won" and
/// before every `start()`.
#[wasm_bindgen]
pub struct WasmGame {
    config: Config,
    rng: SmallRng,
    session: Session,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(pairs: usize) -> Self {
        console_error_panic_hook::set_once();
        let config = Config::default().with_pairs(pairs);
        Self {
            rng: config.rng(),
            config,
            session: Session::default(),
        }
    }

    #[wasm_bindgen]
    pub fn start(&mut self) {
        self.session.start(self.config.symbols(), &mut self.rng);
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.session.reset(self.config.symbols(), &mut self.rng);
    }

    /// One of "ignored", "revealed", "matched", "mismatched", "won".
    #[wasm_bindgen]
    pub fn flip(&mut self, position: usize) -> String {
        self.session.flip(position).label().to_string()
    }

    #[wasm_bindgen]
    pub fn rollback(&mut self) -> bool {
        self.session.rollback()
    }

    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.session.tick()
    }

    /// Board, counters and phase as JSON.
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn delay_ms(&self) -> u32 {
        u32::try_from(self.config.delay.as_millis()).unwrap_or(u32::MAX)
    }

    #[wasm_bindgen]
    pub fn period_ms(&self) -> u32 {
        u32::try_from(self.config.period.as_millis()).unwrap_or(u32::MAX)
    }

    #[wasm_bindgen]
    pub fn moves(&self) -> u32 {
        self.session.moves()
    }

    #[wasm_bindgen]
    pub fn elapsed(&self) -> u32 {
        u32::try_from(self.session.elapsed()).unwrap_or(u32::MAX)
    }

    #[wasm_bindgen]
    pub fn is_won(&self) -> bool {
        self.session.phase() == Phase::Won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pair_round() {
        let mut game = WasmGame::new(1);
        game.start();
        assert_eq!(game.flip(0), "revealed");
        assert_eq!(game.flip(0), "ignored");
        assert_eq!(game.flip(1), "won");
        assert!(game.is_won());
        assert_eq!(game.moves(), 1);
        assert!(!game.tick());
    }

    #[test]
    fn durations_in_millis() {
        let game = WasmGame::new(8);
        assert_eq!(game.delay_ms(), 600);
        assert_eq!(game.period_ms(), 1000);
        assert_eq!(game.elapsed(), 0);
    }

    #[test]
    fn snapshot_is_json() {
        let mut game = WasmGame::new(2);
        game.start();
        game.flip(0);
        let json = game.snapshot().unwrap();
        assert!(json.contains(r#""phase":"running""#));
        assert!(json.contains(r#""state":"revealed""#));
        assert!(json.contains(r#""glyph":null"#));
    }
}
