//! Basic Keypad
//!
//! This example drives a calculator session the way a widget would.
//!
//! Key concepts:
//! - Button labels and key names resolve to the same actions
//! - Evaluation is strictly left to right
//! - Division by zero shows `Error` until the next digit or clear
//! - Extra key bindings and the starting theme come from TOML
//!
//! Run with: cargo run --example basic_keypad

use keypad::{Calculator, CalculatorConfig, State};

fn press_all(calculator: &mut Calculator, buttons: &[&str]) {
    for button in buttons {
        calculator.press_button(button);
        println!("  {button:>3}  ->  {}", calculator.display());
    }
}

fn main() {
    println!("=== Basic Keypad Example ===\n");

    let mut calculator = Calculator::new();

    println!("Pointer input: 2 + 3 × 4 =");
    press_all(&mut calculator, &["2", "+", "3", "×", "4", "="]);

    println!("\nDivision by zero, then a fresh number:");
    press_all(&mut calculator, &["AC", "6", "÷", "0", "=", "7"]);

    println!("\nKeyboard input: 0.1 + 0.2 Enter");
    for key in ["Escape", "0", ".", "1", "+", "0", ".", "2", "Enter"] {
        calculator.press_key(key);
    }
    println!("  display: {}", calculator.display());
    println!("  phase:   {}", calculator.phase().name());

    let path: Vec<_> = calculator
        .history()
        .get_path()
        .into_iter()
        .map(|phase| phase.name())
        .collect();
    println!("  last {} phases: {}", path.len(), path.join(" -> "));

    println!("\nTheme toggle leaves the display alone:");
    let theme = calculator.toggle_theme();
    println!("  theme:      {theme:?}");
    println!("  background: {}", calculator.palette().background);
    println!("  display:    {}", calculator.display());

    println!("\nConfigured session:");
    let config = CalculatorConfig::from_toml_str(
        r#"
        theme = "dark"
        history_capacity = 8

        [keys]
        "x" = "*"
        "c" = "clear"
        "#,
    )
    .unwrap();
    let mut configured = Calculator::with_config(&config).unwrap();
    for key in ["9", "x", "9", "Enter"] {
        configured.press_key(key);
    }
    println!("  9 x 9 = {}", configured.display());
    configured.press_key("c");
    println!("  after c: {}", configured.display());
    println!("  theme:   {:?}", configured.theme());

    println!("\n=== Example Complete ===");
}
