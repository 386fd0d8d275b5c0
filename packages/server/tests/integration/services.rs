//! Store-level checks that bypass HTTP and drive the services directly.

use ::common::AssetCategory;
use uuid::Uuid;

use inventory_server::services::{
    AssetService, EmployeeService, NewAsset, NewEmployee, PcLaptopService, PcLaptopSlots,
    ServiceError, Slot,
};

use crate::common::{test_db, tick};

fn new_employee(name: &str, email: &str) -> NewEmployee {
    NewEmployee {
        name: name.into(),
        email: email.into(),
        ..Default::default()
    }
}

mod assets {
    use super::*;

    #[tokio::test]
    async fn every_category_round_trips_through_the_store() {
        let (db, _dir) = test_db().await;
        let service = AssetService::new(&db);

        for &category in AssetCategory::ALL {
            let mut input = NewAsset::new(category);
            input.attributes.serial_number = Some(format!("SN-{category}"));
            input.attributes.purchase_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 31);
            let created = service.create(input).await.unwrap();

            let fetched = service.get(created.id).await.unwrap();
            assert_eq!(fetched.category, category);
            assert_eq!(fetched.serial_number, created.serial_number);
            assert_eq!(fetched.purchase_date, created.purchase_date);
        }
    }

    #[tokio::test]
    async fn list_by_category_is_exact_and_newest_first() {
        let (db, _dir) = test_db().await;
        let service = AssetService::new(&db);

        let older = service.create(NewAsset::new(AssetCategory::Ram)).await.unwrap();
        tick().await;
        service
            .create(NewAsset::new(AssetCategory::Storage))
            .await
            .unwrap();
        tick().await;
        let newer = service.create(NewAsset::new(AssetCategory::Ram)).await.unwrap();

        let ram = service.list_by_category(AssetCategory::Ram).await.unwrap();
        let ids: Vec<Uuid> = ram.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let (db, _dir) = test_db().await;
        let service = AssetService::new(&db);

        assert!(matches!(
            service.get(Uuid::now_v7()).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(Uuid::now_v7()).await,
            Err(ServiceError::NotFound(_))
        ));
    }
}

mod bundles {
    use super::*;

    #[tokio::test]
    async fn deleting_a_slot_asset_leaves_the_bundle_intact() {
        let (db, _dir) = test_db().await;
        let assets = AssetService::new(&db);
        let bundles = PcLaptopService::new(&db);

        let ram = assets.create(NewAsset::new(AssetCategory::Ram)).await.unwrap();
        let bundle = bundles
            .create(PcLaptopSlots {
                ram_id: Some(ram.id),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(bundle.asset(Slot::Ram).map(|a| a.id), Some(ram.id));

        assets.delete(ram.id).await.unwrap();

        let reloaded = bundles.get(bundle.bundle.id).await.unwrap();
        assert_eq!(reloaded.bundle.ram_id, Some(ram.id));
        assert_eq!(reloaded.bundle.updated_at, bundle.bundle.updated_at);
        assert!(reloaded.asset(Slot::Ram).is_none());
    }

    #[tokio::test]
    async fn slot_category_check_only_applies_when_enabled() {
        let (db, _dir) = test_db().await;
        let mouse = AssetService::new(&db)
            .create(NewAsset::new(AssetCategory::Mouse))
            .await
            .unwrap();
        let slots = PcLaptopSlots {
            ram_id2: Some(mouse.id),
            ..Default::default()
        };

        let lenient = PcLaptopService::new(&db).create(slots.clone()).await;
        assert!(lenient.is_ok());

        let strict = PcLaptopService::new(&db)
            .enforce_slot_categories(true)
            .create(slots)
            .await;
        assert!(matches!(strict, Err(ServiceError::Validation(msg)) if msg.contains("ramId2")));
    }
}

mod employees {
    use super::*;

    #[tokio::test]
    async fn duplicate_email_leaves_exactly_one_employee() {
        let (db, _dir) = test_db().await;
        let service = EmployeeService::new(&db);

        service
            .create(new_employee("Ada", "ada@example.com"))
            .await
            .unwrap();
        let second = service
            .create(new_employee("Imposter", "ada@example.com"))
            .await;

        assert!(matches!(second, Err(ServiceError::Conflict(_))));
        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].employee.name, "Ada");
    }

    #[tokio::test]
    async fn employee_id_is_unique_only_when_present() {
        let (db, _dir) = test_db().await;
        let service = EmployeeService::new(&db);

        service
            .create(new_employee("Ada", "ada@example.com"))
            .await
            .unwrap();
        service
            .create(new_employee("Bob", "bob@example.com"))
            .await
            .unwrap();

        let mut cy = new_employee("Cy", "cy@example.com");
        cy.employee_id = Some("EMP-1".into());
        service.create(cy).await.unwrap();

        let mut dee = new_employee("Dee", "dee@example.com");
        dee.employee_id = Some("EMP-1".into());
        assert!(matches!(
            service.create(dee).await,
            Err(ServiceError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn store_constraint_catches_duplicates_the_precheck_misses() {
        let (db, _dir) = test_db().await;
        let service = EmployeeService::new(&db);

        service
            .create(new_employee("Ada", "ada@example.com"))
            .await
            .unwrap();

        use inventory_server::entity::employee;
        use sea_orm::{ActiveModelTrait, Set};
        let now = chrono::Utc::now();
        let raw = employee::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set("Racer".into()),
            email: Set("ada@example.com".into()),
            phone: Set(None),
            position: Set(None),
            department: Set(None),
            employee_id: Set(None),
            pc_laptop_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let err = raw.insert(&db).await.unwrap_err();

        assert!(matches!(ServiceError::from(err), ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn dangling_bundle_reference_is_preserved() {
        let (db, _dir) = test_db().await;
        let service = EmployeeService::new(&db);
        let ada = service
            .create(new_employee("Ada", "ada@example.com"))
            .await
            .unwrap();
        let ghost = Uuid::now_v7();

        service
            .assign_pc_laptop(ada.employee.id, Some(ghost))
            .await
            .unwrap();

        let reloaded = service.get(ada.employee.id).await.unwrap();
        assert_eq!(reloaded.employee.pc_laptop_id, Some(ghost));
        assert!(reloaded.pc_laptop.is_none());
    }

    #[tokio::test]
    async fn assigned_bundle_resolves_with_its_slots() {
        let (db, _dir) = test_db().await;
        let keyboard = AssetService::new(&db)
            .create(NewAsset::new(AssetCategory::Keyboard))
            .await
            .unwrap();
        let bundle = PcLaptopService::new(&db)
            .create(PcLaptopSlots {
                keyboard_id: Some(keyboard.id),
                ..Default::default()
            })
            .await
            .unwrap();
        let service = EmployeeService::new(&db);
        let ada = service
            .create(new_employee("Ada", "ada@example.com"))
            .await
            .unwrap();

        let assigned = service
            .assign_pc_laptop(ada.employee.id, Some(bundle.bundle.id))
            .await
            .unwrap();

        let resolved = assigned.pc_laptop.expect("bundle should resolve");
        assert_eq!(resolved.bundle.id, bundle.bundle.id);
        assert_eq!(
            resolved.asset(Slot::Keyboard).map(|a| a.id),
            Some(keyboard.id)
        );
    }

    #[tokio::test]
    async fn assign_assets_replaces_the_stored_sequence() {
        let (db, _dir) = test_db().await;
        let assets = AssetService::new(&db);
        let a1 = assets.create(NewAsset::new(AssetCategory::Monitor)).await.unwrap();
        let a2 = assets.create(NewAsset::new(AssetCategory::Camera)).await.unwrap();
        let a3 = assets.create(NewAsset::new(AssetCategory::Vonage)).await.unwrap();
        let service = EmployeeService::new(&db);
        let ada = service
            .create(new_employee("Ada", "ada@example.com"))
            .await
            .unwrap();

        service
            .assign_assets(ada.employee.id, vec![a1.id, a2.id])
            .await
            .unwrap();
        let after = service
            .assign_assets(ada.employee.id, vec![a3.id])
            .await
            .unwrap();

        assert_eq!(after.assigned_asset_ids, vec![a3.id]);
        assert_eq!(after.assigned_assets.len(), 1);
        assert_eq!(after.assigned_assets[0].id, a3.id);
    }

    #[tokio::test]
    async fn assign_assets_handles_lists_spanning_several_batches() {
        let (db, _dir) = test_db().await;
        let assets = AssetService::new(&db);
        let first = assets.create(NewAsset::new(AssetCategory::Monitor)).await.unwrap();
        let middle = assets.create(NewAsset::new(AssetCategory::Camera)).await.unwrap();
        let last = assets.create(NewAsset::new(AssetCategory::Mouse)).await.unwrap();
        let service = EmployeeService::new(&db);
        let ada = service
            .create(new_employee("Ada", "ada@example.com"))
            .await
            .unwrap();

        let mut ids: Vec<Uuid> = (0..1_250).map(|_| Uuid::now_v7()).collect();
        ids[0] = first.id;
        ids[700] = middle.id;
        ids[1_249] = last.id;
        ids[1_000] = middle.id;

        let assigned = service
            .assign_assets(ada.employee.id, ids.clone())
            .await
            .unwrap();
        assert_eq!(assigned.assigned_asset_ids, ids);

        let reloaded = service.get(ada.employee.id).await.unwrap();
        assert_eq!(reloaded.assigned_asset_ids, ids);
        let resolved: Vec<Uuid> = reloaded.assigned_assets.iter().map(|a| a.id).collect();
        assert_eq!(resolved, vec![first.id, middle.id, middle.id, last.id]);

        let shorter = service
            .assign_assets(ada.employee.id, ids[..3].to_vec())
            .await
            .unwrap();
        assert_eq!(shorter.assigned_asset_ids, ids[..3].to_vec());
    }

    #[tokio::test]
    async fn dangling_asset_ids_are_kept_but_not_resolved() {
        let (db, _dir) = test_db().await;
        let assets = AssetService::new(&db);
        let kept = assets.create(NewAsset::new(AssetCategory::Monitor)).await.unwrap();
        let gone = assets.create(NewAsset::new(AssetCategory::Mouse)).await.unwrap();
        let service = EmployeeService::new(&db);
        let ada = service
            .create(new_employee("Ada", "ada@example.com"))
            .await
            .unwrap();
        service
            .assign_assets(ada.employee.id, vec![gone.id, kept.id])
            .await
            .unwrap();

        assets.delete(gone.id).await.unwrap();

        let reloaded = service.get(ada.employee.id).await.unwrap();
        assert_eq!(reloaded.assigned_asset_ids, vec![gone.id, kept.id]);
        let resolved: Vec<Uuid> = reloaded.assigned_assets.iter().map(|a| a.id).collect();
        assert_eq!(resolved, vec![kept.id]);
    }

    #[tokio::test]
    async fn delete_removes_assignment_rows() {
        let (db, _dir) = test_db().await;
        let asset = AssetService::new(&db)
            .create(NewAsset::new(AssetCategory::Monitor))
            .await
            .unwrap();
        let service = EmployeeService::new(&db);
        let ada = service
            .create(new_employee("Ada", "ada@example.com"))
            .await
            .unwrap();
        service
            .assign_assets(ada.employee.id, vec![asset.id])
            .await
            .unwrap();

        service.delete(ada.employee.id).await.unwrap();

        use inventory_server::entity::employee_asset;
        use sea_orm::{EntityTrait, PaginatorTrait};
        assert_eq!(employee_asset::Entity::find().count(&db).await.unwrap(), 0);
        assert!(AssetService::new(&db).get(asset.id).await.is_ok());
    }

    #[tokio::test]
    async fn list_resolves_more_employees_than_one_batch() {
        let (db, _dir) = test_db().await;
        let monitor = AssetService::new(&db)
            .create(NewAsset::new(AssetCategory::Monitor))
            .await
            .unwrap();

        use inventory_server::entity::employee;
        use sea_orm::{EntityTrait, Set};
        let now = chrono::Utc::now();
        let ids: Vec<Uuid> = (0..620).map(|_| Uuid::now_v7()).collect();
        let rows: Vec<employee::ActiveModel> = ids
            .iter()
            .enumerate()
            .map(|(n, id)| employee::ActiveModel {
                id: Set(*id),
                name: Set(format!("Employee {n}")),
                email: Set(format!("e{n}@example.com")),
                phone: Set(None),
                position: Set(None),
                department: Set(None),
                employee_id: Set(None),
                pc_laptop_id: Set(None),
                created_at: Set(now),
                updated_at: Set(now),
            })
            .collect();
        let oldest = ids[0];
        for chunk in rows.chunks(50) {
            employee::Entity::insert_many(chunk.to_vec())
                .exec_without_returning(&db)
                .await
                .unwrap();
        }

        let service = EmployeeService::new(&db);
        service
            .assign_assets(oldest, vec![monitor.id])
            .await
            .unwrap();

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 620);
        let holder = all.iter().find(|e| e.employee.id == oldest).unwrap();
        assert_eq!(holder.assigned_assets[0].id, monitor.id);
        assert_eq!(
            all.iter().filter(|e| !e.assigned_assets.is_empty()).count(),
            1
        );
    }

    #[tokio::test]
    async fn list_resolves_every_employee_newest_first() {
        let (db, _dir) = test_db().await;
        let assets = AssetService::new(&db);
        let monitor = assets.create(NewAsset::new(AssetCategory::Monitor)).await.unwrap();
        let service = EmployeeService::new(&db);

        let mut ada = new_employee("Ada", "ada@example.com");
        ada.assigned_assets = vec![monitor.id];
        let ada = service.create(ada).await.unwrap();
        tick().await;
        let bob = service
            .create(new_employee("Bob", "bob@example.com"))
            .await
            .unwrap();

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].employee.id, bob.employee.id);
        assert!(all[0].assigned_assets.is_empty());
        assert_eq!(all[1].employee.id, ada.employee.id);
        assert_eq!(all[1].assigned_assets[0].id, monitor.id);
    }
}
