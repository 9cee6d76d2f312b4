// Demo walkthrough of the ledger model: build a bank, register two
// accounts, run a transfer, and show the insufficient-funds path.

use anyhow::Result;
use rust_decimal_macros::dec;

use bank_ledger::{Account, Bank};

fn main() -> Result<()> {
    println!("🏦 Bank Ledger demo (v{})", bank_ledger::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut origin = Account::new("Empresa", dec!(1200.00));
    let mut destination = Account::new("Ebmdev", dec!(1000.00));

    let mut bank = Bank::new();
    bank.set_name("La Caixa");

    println!("\n💸 Transferring 500.00 from Empresa to Ebmdev...");
    println!("   before: {} / {}", origin.balance_display(), destination.balance_display());
    bank.transfer(&mut origin, &mut destination, dec!(500))?;
    println!("✓  after: {} / {}", origin.balance_display(), destination.balance_display());

    println!("\n📒 Registering accounts with {}...", bank.name());
    bank.add_account(origin);
    bank.add_account(destination);
    println!("✓ {} accounts registered", bank.len());
    println!("{}", serde_json::to_string_pretty(&bank)?);

    println!("\n🚫 Debiting 100.00 from a 10.00 account...");
    let mut petty_cash = Account::new("Petty cash", dec!(10.00));
    match petty_cash.debit(dec!(100)) {
        Ok(()) => println!("unexpected: debit went through"),
        Err(err) => println!("✓ rejected: {}", err),
    }
    println!("✓ balance still {}", petty_cash.balance_display());

    Ok(())
}
