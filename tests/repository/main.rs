mod stock;

use std::collections::BTreeSet;

use stock::StockItem;
use typed_repo::{
    Count, Find, HasIdentity, Identity, RepositoryError, SnapshotFile, TypedRepository,
};

fn ids_of(items: &[StockItem]) -> BTreeSet<Identity> {
    items.iter().map(HasIdentity::id).collect()
}

#[test]
fn add_update_remove_scenario() {
    let mut repo = TypedRepository::new();

    repo.add(StockItem::new(1, 10)).unwrap();
    repo.add(StockItem::new(2, 5)).unwrap();
    repo.update_quantity(1, 15).unwrap();
    repo.remove(2).unwrap();

    let all = repo.get_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, 1);
    assert_eq!(all[0].qty, 15);
}

#[test]
fn distinct_adds_enumerate_exactly() {
    let ids: Vec<Identity> = vec![7, -3, 0, 42, 1_000_000, 9];
    let mut repo = TypedRepository::new();
    for id in &ids {
        repo.add(StockItem::new(*id, 1)).unwrap();
    }

    assert_eq!(
        ids_of(&repo.get_all()),
        ids.iter().copied().collect::<BTreeSet<_>>()
    );
    assert_eq!(repo.len(), ids.len());
}

#[test]
fn duplicate_add_fails_and_keeps_existing_entry() {
    let mut repo = TypedRepository::new();
    repo.add(StockItem::new(1, 10)).unwrap();

    for qty in [0, 10, 99] {
        let err = repo.add(StockItem::new(1, qty)).unwrap_err();
        assert_eq!(err, RepositoryError::DuplicateIdentity { id: 1 });
    }
    assert_eq!(repo.get_all(), vec![StockItem::new(1, 10)]);
}

#[test]
fn unknown_identities_are_not_found() {
    let mut repo = TypedRepository::new();
    repo.add(StockItem::new(1, 1)).unwrap();
    repo.remove(1).unwrap();

    for id in [1, 2, -1] {
        assert_eq!(repo.get(id).unwrap_err(), RepositoryError::NotFound { id });
        assert_eq!(repo.remove(id).unwrap_err(), RepositoryError::NotFound { id });
        assert_eq!(
            repo.update_quantity(id, 3).unwrap_err(),
            RepositoryError::NotFound { id }
        );
    }
    assert!(repo.is_empty());
}

#[test]
fn negative_quantity_is_invalid_and_changes_nothing() {
    let mut repo = TypedRepository::new();
    repo.add(StockItem::new(2, 15)).unwrap();

    for qty in [-1, -5, i64::MIN] {
        let err = repo.update_quantity(2, qty).unwrap_err();
        match err {
            RepositoryError::InvalidValue { id, reason } => {
                assert_eq!(id, 2);
                assert!(reason.contains("negative"));
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }
    assert_eq!(repo.get(2).unwrap().qty, 15);
}

#[test]
fn removed_identity_can_be_reused() {
    let mut repo = TypedRepository::new();
    repo.add(StockItem::new(5, 1)).unwrap();
    repo.remove(5).unwrap();

    assert!(matches!(repo.get(5), Err(RepositoryError::NotFound { id: 5 })));
    repo.add(StockItem::new(5, 2)).unwrap();
    assert_eq!(repo.get(5).unwrap().qty, 2);
}

#[test]
fn get_all_is_stable_without_mutation() {
    let mut repo = TypedRepository::new();
    for id in 1..=20 {
        repo.add(StockItem::new(id, id * 2)).unwrap();
    }

    let first = repo.get_all();
    let second = repo.get_all();
    assert_eq!(first, second);
}

#[test]
fn queries_read_current_state() {
    let mut repo = TypedRepository::new();
    for (id, qty) in [(1, 0), (2, 4), (3, 0), (4, 9)] {
        repo.add(StockItem::new(id, qty)).unwrap();
    }

    let out_of_stock = repo.find(|item| item.qty == 0);
    assert_eq!(ids_of(&out_of_stock), BTreeSet::from([1, 3]));

    repo.update_quantity(3, 2).unwrap();
    assert_eq!(repo.count(|item| item.qty == 0), 1);
}

#[test]
fn external_lock_shares_a_repository_across_threads() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let repo = Arc::new(Mutex::new(TypedRepository::new()));
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || {
                for n in 0..25 {
                    let id = worker * 100 + n;
                    repo.lock().unwrap().add(StockItem::new(id, n)).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(repo.lock().unwrap().len(), 100);
}

#[test]
fn snapshot_replays_into_fresh_repository() {
    let dir = tempfile::tempdir().unwrap();
    let file = SnapshotFile::json(dir.path().join("stock.json"));

    let mut repo = TypedRepository::new();
    repo.add(StockItem::new(3, 30)).unwrap();
    repo.add(StockItem::new(1, 10)).unwrap();
    file.save(&repo).unwrap();

    let restored: TypedRepository<StockItem> = file.restore().unwrap();
    assert_eq!(restored.get_all(), repo.get_all());

    // The restored copy is independent of the file and the original.
    repo.update_quantity(3, 0).unwrap();
    assert_eq!(restored.get(3).unwrap().qty, 30);
}

#[cfg(feature = "emitter")]
#[test]
fn observed_repository_reports_changes() {
    use std::sync::{mpsc, Mutex};
    use std::time::Duration;
    use typed_repo::emitter::ENTITY_UPDATED;
    use typed_repo::ObservedRepository;

    let mut repo: ObservedRepository<StockItem> = ObservedRepository::new();
    let (tx, rx) = mpsc::channel();
    let tx = Mutex::new(tx);
    repo.on(ENTITY_UPDATED, move |id| {
        let _ = tx.lock().unwrap().send(id);
    });

    repo.add(StockItem::new(8, 1)).unwrap();
    assert_eq!(repo.adjust_quantity(8, 4).unwrap(), 5);

    // EventEmitter is async, give it time
    assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), "8");
    assert_eq!(repo.get(8).unwrap().qty, 5);
}
