use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct NewProjectDoc { pub name: String, pub product: i32 }

#[derive(ToSchema)]
pub struct ProjectDoc { pub id: i32, pub name: String, pub product: i32 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::project_manage::create_project,
        crate::routes::project_manage::get_projects,
        crate::routes::copywrite::create,
        crate::routes::copywrite::find_all,
        crate::routes::copywrite::find_one,
        crate::routes::copywrite::update,
        crate::routes::copywrite::remove,
    ),
    components(
        schemas(
            HealthResponse,
            NewProjectDoc,
            ProjectDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "project-manage"),
        (name = "copywrite")
    )
)]
pub struct ApiDoc;
