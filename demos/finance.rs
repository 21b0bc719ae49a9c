use chrono::Utc;
use log::warn;
use typed_repo::domain::finance::{
    Account, BankTransferProcessor, CryptoWalletProcessor, Ledger, Money, MobileMoneyProcessor,
    Transaction, TransactionProcessor,
};
use typed_repo::{default_log_level, init_logging};

fn main() -> anyhow::Result<()> {
    init_logging(default_log_level())?;

    let mut ledger = Ledger::new(Account::savings("ACC12345", Money::from_units(1000)));
    let now = Utc::now();

    let payments: [(Transaction, &dyn TransactionProcessor); 3] = [
        (
            Transaction::new(1, now, Money::from_units(150), "Groceries"),
            &MobileMoneyProcessor,
        ),
        (
            Transaction::new(2, now, Money::from_units(200), "Utilities"),
            &BankTransferProcessor,
        ),
        (
            Transaction::new(3, now, Money::from_units(300), "Entertainment"),
            &CryptoWalletProcessor,
        ),
    ];

    for (transaction, processor) in payments {
        match ledger.record(transaction, processor) {
            Ok(receipt) => {
                println!("{}", receipt.processor_line);
                println!("Transaction applied. Updated balance: {}", receipt.balance);
            }
            Err(err) => {
                warn!("event=transaction_rejected module=finance error={}", err);
                println!("Error: {}", err);
            }
        }
    }

    println!(
        "{} transactions recorded on {}, closing balance {}",
        ledger.transactions().len(),
        ledger.account().number(),
        ledger.account().balance()
    );
    Ok(())
}
