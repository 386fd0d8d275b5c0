use serde_json::json;

use crate::common::{TestApp, routes, tick};

const SLOTS: [&str; 9] = [
    "mouseId",
    "keyboardId",
    "motherboardId",
    "cameraId",
    "headphoneId",
    "powerSupplyId",
    "storageId",
    "ramId",
    "ramId2",
];

mod pc_laptop_creation {
    use super::*;

    #[tokio::test]
    async fn create_resolves_filled_slots_and_leaves_the_rest_null() {
        let app = TestApp::spawn().await;
        let mouse = app.create_asset("mouse").await;
        let ram = app.create_asset("ram").await;

        let res = app
            .post(
                routes::PC_LAPTOPS,
                &json!({ "mouseId": mouse, "ramId2": ram }),
            )
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["success"], true);
        let data = &res.body["data"];
        assert_eq!(data["mouseId"]["id"], mouse.as_str());
        assert_eq!(data["mouseId"]["category"], "mouse");
        assert_eq!(data["ramId2"]["id"], ram.as_str());
        for slot in ["keyboardId", "motherboardId", "cameraId", "storageId", "ramId"] {
            assert!(data[slot].is_null(), "{slot} should be empty");
        }
        assert!(data["createdAt"].is_string());
    }

    #[tokio::test]
    async fn empty_bundle_is_allowed() {
        let app = TestApp::spawn().await;

        let res = app.post(routes::PC_LAPTOPS, &json!({})).await;

        assert_eq!(res.status, 201);
        for slot in SLOTS {
            assert!(res.body["data"][slot].is_null());
        }
    }

    #[tokio::test]
    async fn unknown_asset_ids_are_accepted_and_resolve_to_null() {
        let app = TestApp::spawn().await;
        let ghost = uuid::Uuid::now_v7().to_string();

        let res = app
            .post(routes::PC_LAPTOPS, &json!({ "storageId": ghost }))
            .await;

        assert_eq!(res.status, 201);
        assert!(res.body["data"]["storageId"].is_null());
    }

    #[tokio::test]
    async fn mismatched_categories_are_accepted_by_default() {
        let app = TestApp::spawn().await;
        let mouse = app.create_asset("mouse").await;

        let res = app
            .post(routes::PC_LAPTOPS, &json!({ "ramId": mouse }))
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["data"]["ramId"]["category"], "mouse");
    }

    #[tokio::test]
    async fn mismatched_categories_are_rejected_when_enforced() {
        let app =
            TestApp::spawn_with(|config| config.inventory.enforce_slot_categories = true).await;
        let mouse = app.create_asset("mouse").await;
        let ram = app.create_asset("ram").await;
        let ghost = uuid::Uuid::now_v7().to_string();

        let res = app
            .post(routes::PC_LAPTOPS, &json!({ "ramId": mouse }))
            .await;
        res.assert_error(400, "VALIDATION_ERROR");
        assert!(res.body["message"].as_str().unwrap().contains("ramId"));

        let res = app
            .post(
                routes::PC_LAPTOPS,
                &json!({ "ramId": ram, "ramId2": ram, "mouseId": ghost }),
            )
            .await;
        assert_eq!(res.status, 201, "{}", res.text);
    }

    #[tokio::test]
    async fn malformed_slot_id_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post(routes::PC_LAPTOPS, &json!({ "mouseId": "nope" }))
            .await;

        res.assert_error(400, "VALIDATION_ERROR");
    }
}

mod pc_laptop_reads {
    use super::*;

    #[tokio::test]
    async fn list_is_newest_first_with_resolved_slots() {
        let app = TestApp::spawn().await;
        let keyboard = app.create_asset("keyboard").await;
        let older = app.create_pc_laptop(json!({})).await;
        tick().await;
        let newer = app
            .create_pc_laptop(json!({ "keyboardId": keyboard }))
            .await;

        let res = app.get(routes::PC_LAPTOPS).await;

        assert_eq!(res.status, 200);
        let data = res.body["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["id"], newer.as_str());
        assert_eq!(data[0]["keyboardId"]["id"], keyboard.as_str());
        assert_eq!(data[1]["id"], older.as_str());
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app
            .get(&routes::pc_laptop(&uuid::Uuid::now_v7().to_string()))
            .await;

        res.assert_error(404, "NOT_FOUND");
        assert_eq!(res.body["message"], "PC/Laptop not found");
    }

    #[tokio::test]
    async fn deleted_asset_leaves_an_empty_slot() {
        let app = TestApp::spawn().await;
        let storage = app.create_asset("storage").await;
        let camera = app.create_asset("camera").await;
        let id = app
            .create_pc_laptop(json!({ "storageId": storage, "cameraId": camera }))
            .await;

        let res = app.delete(&routes::asset(&storage)).await;
        assert_eq!(res.status, 200);

        let res = app.get(&routes::pc_laptop(&id)).await;
        assert_eq!(res.status, 200);
        assert!(res.body["data"]["storageId"].is_null());
        assert_eq!(res.body["data"]["cameraId"]["id"], camera.as_str());
    }
}

mod pc_laptop_update {
    use super::*;

    #[tokio::test]
    async fn update_touches_only_supplied_slots() {
        let app = TestApp::spawn().await;
        let mouse = app.create_asset("mouse").await;
        let keyboard = app.create_asset("keyboard").await;
        let ram = app.create_asset("ram").await;
        let id = app
            .create_pc_laptop(json!({ "mouseId": mouse, "keyboardId": keyboard }))
            .await;

        let res = app
            .put(
                &routes::pc_laptop(&id),
                &json!({ "keyboardId": null, "ramId": ram }),
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        let data = &res.body["data"];
        assert_eq!(data["mouseId"]["id"], mouse.as_str());
        assert!(data["keyboardId"].is_null());
        assert_eq!(data["ramId"]["id"], ram.as_str());
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app
            .put(
                &routes::pc_laptop(&uuid::Uuid::now_v7().to_string()),
                &json!({ "mouseId": null }),
            )
            .await;

        res.assert_error(404, "NOT_FOUND");
    }
}

mod pc_laptop_deletion {
    use super::*;

    #[tokio::test]
    async fn delete_keeps_assets() {
        let app = TestApp::spawn().await;
        let mouse = app.create_asset("mouse").await;
        let id = app.create_pc_laptop(json!({ "mouseId": mouse })).await;

        let res = app.delete(&routes::pc_laptop(&id)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["message"], "PC/Laptop deleted successfully");

        app.get(&routes::pc_laptop(&id))
            .await
            .assert_error(404, "NOT_FOUND");
        assert_eq!(app.get(&routes::asset(&mouse)).await.status, 200);
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app
            .delete(&routes::pc_laptop(&uuid::Uuid::now_v7().to_string()))
            .await;

        res.assert_error(404, "NOT_FOUND");
    }
}
