use contracts::domain::a001_major::request::categories_path;
use contracts::domain::a002_category::{CategoriesResponse, Category};
use contracts::shared::error::NetworkError;

use crate::shared::http::get_json;

pub async fn fetch_categories() -> Result<Vec<Category>, NetworkError> {
    let response: CategoriesResponse = get_json(categories_path()).await?;
    Ok(response.data)
}
