//! Diesel people repository against embedded PostgreSQL.
//! Use `cargo test -- --ignored` with `RUN_PG_EMBEDDED=1` to run it.

use chrono::{TimeZone, Utc};
use nearby_users::domain::ports::{PersonRepository, PersonRepositoryError};
use nearby_users::domain::{BatchId, Coordinate, NewPerson, PersonId, PersonProfile};
use nearby_users::outbound::persistence::{
    DbPool, DieselPersonRepository, PoolConfig, run_pending_migrations,
};
use pg_embedded_setup_unpriv::TestCluster;

fn person(email: &str, latitude: f64, batch: i64) -> NewPerson {
    NewPerson {
        profile: PersonProfile::new(email, "Ada", "Lovelace", "female").expect("profile"),
        coordinate: Coordinate::new(latitude, 0.0).expect("coordinate"),
        batch_id: BatchId::new(batch).expect("batch"),
        ingested_at: Utc
            .with_ymd_and_hms(2015, 5, 3, 8, 0, 0)
            .single()
            .expect("timestamp"),
    }
}

#[test]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn diesel_repository_round_trip() {
    if std::env::var("RUN_PG_EMBEDDED").as_deref() != Ok("1") {
        eprintln!("SKIP-TEST-CLUSTER: set RUN_PG_EMBEDDED=1 to run");
        return;
    }

    let cluster = TestCluster::new().expect("embedded Postgres should start");
    let url = cluster.connection().database_url("postgres");
    let applied = run_pending_migrations(&url).expect("migrations apply");
    assert!(applied >= 1);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime");
    runtime.block_on(async {
        let pool = DbPool::new(PoolConfig::new(url.as_str()).with_max_size(2))
            .await
            .expect("pool");
        let repository = DieselPersonRepository::new(pool);

        assert_eq!(repository.count().await.expect("count"), 0);
        assert!(repository.random().await.expect("random").is_none());

        let ids = repository
            .insert_batch(&[person("a@example.com", 0.0, 1), person("b@example.com", 1.0, 1)])
            .await
            .expect("insert");
        assert_eq!(ids.len(), 2);
        assert!(ids[0] < ids[1]);

        let err = repository
            .insert_batch(&[person("c@example.com", 2.0, 2), person("a@example.com", 3.0, 2)])
            .await
            .expect_err("duplicate email rejected");
        assert!(matches!(err, PersonRepositoryError::DuplicateEmail { .. }));
        assert_eq!(repository.count().await.expect("count"), 2);

        let stored = repository
            .find_by_id(ids[0])
            .await
            .expect("find")
            .expect("present");
        assert_eq!(stored.profile.email(), "a@example.com");
        assert_eq!(stored.batch_id.get(), 1);

        let others = repository.all_except(ids[0]).await.expect("all_except");
        assert_eq!(others.len(), 1);
        assert_eq!(others[0].id, ids[1]);

        assert!(repository.random().await.expect("random").is_some());

        let mut large: Vec<NewPerson> = (0..9_000)
            .map(|index| person(&format!("bulk{index}@example.com"), 10.0, 3))
            .collect();
        large.push(person("a@example.com", 11.0, 3));
        let err = repository
            .insert_batch(&large)
            .await
            .expect_err("duplicate in a later chunk rejects the batch");
        assert!(matches!(err, PersonRepositoryError::DuplicateEmail { .. }));
        assert_eq!(repository.count().await.expect("count"), 2);

        large.pop();
        let bulk_ids = repository.insert_batch(&large).await.expect("bulk insert");
        assert_eq!(bulk_ids.len(), 9_000);
        assert_eq!(repository.count().await.expect("count"), 9_002);
        assert!(
            repository
                .find_by_id(PersonId::new(i64::MAX))
                .await
                .expect("find")
                .is_none()
        );
    });
}
