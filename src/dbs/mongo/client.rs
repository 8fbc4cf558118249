use mongodb::{
    Client, Collection, IndexModel,
    bson::doc,
    options::{ClientOptions, Credential, IndexOptions, Tls, TlsOptions},
};
use std::sync::Arc;

use crate::{
    configs::mongo::MONGO_CONFIGS,
    dbs::mongo::models::{
        config_entry::ConfigEntry, course::Course, course_panel::CoursePanel,
        role_group::RoleGroup,
    },
};

pub struct MongoDB {
    pub role_groups: Collection<RoleGroup>,
    pub configs: Collection<ConfigEntry>,
    pub courses: Collection<Course>,
    pub course_panels: Collection<CoursePanel>,
}

impl MongoDB {
    pub async fn init() -> anyhow::Result<Arc<Self>> {
        let mut opts = ClientOptions::parse(&MONGO_CONFIGS.uri).await?;
        opts.credential = Some(
            Credential::builder()
                .username(MONGO_CONFIGS.username.clone())
                .password(MONGO_CONFIGS.password.clone())
                .source(MONGO_CONFIGS.auth_source.clone())
                .build(),
        );
        if MONGO_CONFIGS.ssl {
            let mut tls_opts = TlsOptions::default();
            if let Some(ref ca) = MONGO_CONFIGS.ca_file_path {
                tls_opts.ca_file_path = Some(ca.into());
            }
            if let Some(ref cert) = MONGO_CONFIGS.cert_key_file_path {
                tls_opts.cert_key_file_path = Some(cert.into());
            }
            if let Some(v) = MONGO_CONFIGS.allow_invalid_certificates {
                tls_opts.allow_invalid_certificates = Some(v);
            }
            opts.tls = Some(Tls::Enabled(tls_opts));
        } else {
            opts.tls = Some(Tls::Disabled);
        }

        let client = Client::with_options(opts)?;
        let database = client.database(&MONGO_CONFIGS.database);

        for coll in ["role_groups", "configs", "courses", "course_panels"] {
            if let Err(e) = database.create_collection(coll).await {
                tracing::debug!(collection = coll, error = %e, "failed to create collection (might already exist)");
            }
        }

        let role_groups = database.collection::<RoleGroup>("role_groups");
        let configs = database.collection::<ConfigEntry>("configs");
        let courses = database.collection::<Course>("courses");
        let course_panels = database.collection::<CoursePanel>("course_panels");

        let idx = IndexModel::builder()
            .keys(doc! { "group_id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        if let Err(e) = role_groups.create_index(idx).await {
            tracing::debug!(collection = "role_groups", error = %e, "failed to create index");
        }

        let idx = IndexModel::builder()
            .keys(doc! { "key": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        if let Err(e) = configs.create_index(idx).await {
            tracing::debug!(collection = "configs", error = %e, "failed to create index");
        }

        let idx = IndexModel::builder()
            .keys(doc! { "channel_id": 1, "year": 1 })
            .build();
        if let Err(e) = courses.create_index(idx).await {
            tracing::debug!(collection = "courses", error = %e, "failed to create index");
        }

        let idx = IndexModel::builder()
            .keys(doc! { "channel_id": 1, "year": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        if let Err(e) = course_panels.create_index(idx).await {
            tracing::debug!(collection = "course_panels", error = %e, "failed to create index");
        }

        Ok(Arc::new(Self {
            role_groups,
            configs,
            courses,
            course_panels,
        }))
    }
}
