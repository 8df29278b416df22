//! Application-user provisioning on the target database.

use mongodb::bson::{doc, Document};
use mongodb::Client;

use orderdb_kernel::settings::{AppUserSettings, StoreSettings};

use crate::error::StoreError;

/// Role granted to the application user, scoped to the target database.
const APP_USER_ROLE: &str = "readWrite";

/// Create the application user unless it already exists.
///
/// Returns `true` when the user was created by this call.
pub async fn ensure_app_user(
    client: &Client,
    store: &StoreSettings,
    app_user: &AppUserSettings,
) -> Result<bool, StoreError> {
    let db = client.database(&store.database);

    let reply = db
        .run_command(users_info_command(&app_user.username))
        .await
        .map_err(|source| StoreError::Provision {
            username: app_user.username.clone(),
            source,
        })?;

    if user_exists(&reply)? {
        tracing::info!(
            username = %app_user.username,
            database = %store.database,
            "application user already present, skipping"
        );
        return Ok(false);
    }

    db.run_command(create_user_command(app_user, &store.database))
        .await
        .map_err(|source| StoreError::Provision {
            username: app_user.username.clone(),
            source,
        })?;

    tracing::info!(
        username = %app_user.username,
        database = %store.database,
        role = APP_USER_ROLE,
        "application user created"
    );

    Ok(true)
}

fn users_info_command(username: &str) -> Document {
    doc! { "usersInfo": username }
}

fn create_user_command(app_user: &AppUserSettings, database: &str) -> Document {
    doc! {
        "createUser": &app_user.username,
        "pwd": &app_user.password,
        "roles": [{ "role": APP_USER_ROLE, "db": database }],
    }
}

fn user_exists(reply: &Document) -> Result<bool, StoreError> {
    let users = reply
        .get_array("users")
        .map_err(|source| StoreError::Reply {
            command: "usersInfo",
            source,
        })?;

    Ok(!users.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_user() -> AppUserSettings {
        AppUserSettings::default()
    }

    #[test]
    fn create_user_command_grants_a_single_scoped_role() {
        let command = create_user_command(&app_user(), "order_db");

        assert_eq!(command.get_str("createUser").unwrap(), "order_user");
        assert_eq!(command.get_str("pwd").unwrap(), "order_password");

        let roles = command.get_array("roles").unwrap();
        assert_eq!(roles.len(), 1);

        let role = roles[0].as_document().unwrap();
        assert_eq!(role.get_str("role").unwrap(), "readWrite");
        assert_eq!(role.get_str("db").unwrap(), "order_db");
    }

    #[test]
    fn users_info_command_targets_the_username() {
        let command = users_info_command("order_user");
        assert_eq!(command.get_str("usersInfo").unwrap(), "order_user");
    }

    #[test]
    fn user_exists_reads_the_users_array() {
        let present = doc! { "users": [{ "user": "order_user" }], "ok": 1.0 };
        let absent = doc! { "users": [], "ok": 1.0 };

        assert!(user_exists(&present).unwrap());
        assert!(!user_exists(&absent).unwrap());
    }

    #[test]
    fn user_exists_rejects_a_reply_without_users() {
        let reply = doc! { "ok": 1.0 };
        let err = user_exists(&reply).unwrap_err();
        assert!(matches!(err, StoreError::Reply { command: "usersInfo", .. }));
    }
}
