use chrono::{NaiveDate, TimeZone, Utc};
use typed_repo::domain::finance::{
    Account, BankTransferProcessor, CryptoWalletProcessor, FinanceError, Ledger, Money,
    MobileMoneyProcessor, Transaction, TransactionProcessor,
};
use typed_repo::domain::healthcare::{HealthSystem, Patient, Prescription};
use typed_repo::domain::inventory::{InventoryItem, InventoryLog};
use typed_repo::domain::warehouse::{ElectronicItem, GroceryItem, WarehouseManager};
use typed_repo::{RepositoryError, SnapshotFile};

#[test]
fn warehouse_session() {
    let mut manager = WarehouseManager::new();
    let expiry = NaiveDate::from_ymd_opt(2030, 6, 1).unwrap();

    manager
        .electronics_mut()
        .add(ElectronicItem::new(1, "Laptop", 10, "Dell", 24))
        .unwrap();
    manager
        .electronics_mut()
        .add(ElectronicItem::new(2, "Smartphone", 15, "Samsung", 12))
        .unwrap();
    manager
        .groceries_mut()
        .add(GroceryItem::new(101, "Rice", 50, expiry))
        .unwrap();
    manager
        .groceries_mut()
        .add(GroceryItem::new(102, "Milk", 20, expiry))
        .unwrap();

    let duplicate = manager
        .electronics_mut()
        .add(ElectronicItem::new(1, "Tablet", 5, "Apple", 12));
    assert_eq!(duplicate, Err(RepositoryError::DuplicateIdentity { id: 1 }));

    let missing = WarehouseManager::remove_item(manager.groceries_mut(), 999);
    assert_eq!(missing.unwrap_err(), RepositoryError::NotFound { id: 999 });

    let negative = manager.electronics_mut().update_quantity(2, -5);
    assert!(matches!(negative, Err(RepositoryError::InvalidValue { .. })));

    let change = WarehouseManager::increase_stock(manager.groceries_mut(), 102, 10).unwrap();
    assert_eq!(change.quantity, 30);

    let removed = WarehouseManager::remove_item(manager.groceries_mut(), 101).unwrap();
    assert_eq!(removed.name, "Rice");

    let groceries: Vec<String> = manager
        .groceries()
        .iter()
        .map(|item| item.to_string())
        .collect();
    assert_eq!(
        groceries,
        vec!["[Grocery] ID: 102, Name: Milk, Qty: 30, Expiry: 2030-06-01".to_string()]
    );
    assert_eq!(manager.electronics().len(), 2);
}

#[test]
fn finance_session() {
    let mut ledger = Ledger::new(Account::savings("ACC12345", Money::from_units(1000)));
    let now = Utc::now();

    let processors: [&dyn TransactionProcessor; 3] = [
        &MobileMoneyProcessor,
        &BankTransferProcessor,
        &CryptoWalletProcessor,
    ];
    let transactions = [
        Transaction::new(1, now, Money::from_units(150), "Groceries"),
        Transaction::new(2, now, Money::from_units(200), "Utilities"),
        Transaction::new(3, now, Money::from_units(300), "Entertainment"),
    ];

    let mut balances = Vec::new();
    for (transaction, processor) in transactions.into_iter().zip(processors) {
        balances.push(ledger.record(transaction, processor).unwrap().balance);
    }

    assert_eq!(
        balances,
        vec![
            Money::from_units(850),
            Money::from_units(650),
            Money::from_units(350)
        ]
    );

    let overdraft = ledger.record(
        Transaction::new(4, now, Money::from_units(351), "Travel"),
        &BankTransferProcessor,
    );
    assert!(matches!(overdraft, Err(FinanceError::InsufficientFunds { .. })));
    assert_eq!(ledger.transactions().len(), 3);
}

#[test]
fn healthcare_session() {
    let mut system = HealthSystem::new();
    let issued = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

    system.admit(Patient::new(1, "Alice Johnson", 30, "Female")).unwrap();
    system.admit(Patient::new(2, "Bob Smith", 45, "Male")).unwrap();
    system.admit(Patient::new(3, "Charlie Brown", 55, "Male")).unwrap();

    for (id, patient, medication) in [
        (1, 1, "Amoxicillin"),
        (2, 1, "Ibuprofen"),
        (3, 2, "Paracetamol"),
        (4, 3, "Metformin"),
        (5, 2, "Aspirin"),
    ] {
        system
            .prescribe(Prescription::new(id, patient, medication, issued))
            .unwrap();
    }

    let by_patient = system.prescriptions_by_patient();
    let bob: Vec<_> = by_patient[&2].iter().map(|p| p.id).collect();
    assert_eq!(bob, vec![3, 5]);
    assert_eq!(system.prescriptions_for(2), by_patient[&2]);
}

#[test]
fn inventory_bitcode_session() {
    let dir = tempfile::tempdir().unwrap();
    let added = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let mut log = InventoryLog::with_file(SnapshotFile::bitcode(dir.path().join("inventory.bin")));
    for (id, name, quantity) in [
        (1, "Laptop", 5),
        (2, "Mouse", 20),
        (3, "Keyboard", 15),
        (4, "Monitor", 7),
        (5, "Headset", 10),
    ] {
        log.add(InventoryItem::new(id, name, quantity, added)).unwrap();
    }
    assert_eq!(log.save().unwrap(), 5);

    let mut reopened =
        InventoryLog::with_file(SnapshotFile::bitcode(dir.path().join("inventory.bin")));
    assert_eq!(reopened.load().unwrap(), Some(5));
    assert_eq!(reopened.items().ids(), &[1, 2, 3, 4, 5]);
    assert_eq!(reopened.items().get(4).unwrap().name, "Monitor");
}
