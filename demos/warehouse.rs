use std::fmt::Display;

use chrono::{Days, Local, Months};
use typed_repo::domain::warehouse::{ElectronicItem, GroceryItem, WarehouseItem, WarehouseManager};
use typed_repo::{default_log_level, init_logging, TypedRepository};

fn print_all<T: WarehouseItem + Display>(repository: &TypedRepository<T>) {
    for item in repository {
        println!("{}", item);
    }
    println!();
}

fn seed(manager: &mut WarehouseManager) -> anyhow::Result<()> {
    let today = Local::now().date_naive();

    manager
        .electronics_mut()
        .add(ElectronicItem::new(1, "Laptop", 10, "Dell", 24))?;
    manager
        .electronics_mut()
        .add(ElectronicItem::new(2, "Smartphone", 15, "Samsung", 12))?;

    manager.groceries_mut().add(GroceryItem::new(
        101,
        "Rice",
        50,
        today + Months::new(6),
    ))?;
    manager.groceries_mut().add(GroceryItem::new(
        102,
        "Milk",
        20,
        today + Days::new(10),
    ))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging(default_log_level())?;

    let mut manager = WarehouseManager::new();
    seed(&mut manager)?;

    println!("=== Grocery Items ===");
    print_all(manager.groceries());

    println!("=== Electronic Items ===");
    print_all(manager.electronics());

    if let Err(err) = manager
        .electronics_mut()
        .add(ElectronicItem::new(1, "Tablet", 5, "Apple", 12))
    {
        println!("Error: {}", err);
    }

    match WarehouseManager::remove_item(manager.groceries_mut(), 999) {
        Ok(_) => println!("Item with ID 999 removed successfully."),
        Err(err) => println!("Error: {}", err),
    }

    if let Err(err) = manager.electronics_mut().update_quantity(2, -5) {
        println!("Error: {}", err);
    }

    match WarehouseManager::increase_stock(manager.groceries_mut(), 102, 10) {
        Ok(change) => println!("{}", change),
        Err(err) => println!("Error: {}", err),
    }

    Ok(())
}
