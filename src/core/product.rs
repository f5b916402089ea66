//! Product model - the in-memory catalog item and its persistence operations.
//!
//! A [`Product`] is built in memory without an id. [`Product::create`] inserts it and
//! records the id the database generated; [`Product::update`] and [`Product::delete`]
//! then address that row. Reads go through [`Product::all`], [`Product::find`] and the
//! `find_by_*` helpers, which return a lazy [`ProductQuery`] that is only executed
//! when counted or collected.

use crate::{
    entities::{Category, Product as ProductEntity, product},
    errors::{Error, Result},
};
use sea_orm::{
    ActiveValue::{NotSet, Set, Unchanged},
    PaginatorTrait, QueryOrder, Select,
    prelude::*,
    sea_query::SimpleExpr,
};
use serde_json::{Value, json};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, instrument};

const BAD_DATA: &str = "Invalid product: body of request contained bad or no data";

/// Prices are kept to cents.
const PRICE_SCALE: u32 = 2;

fn to_price_scale(price: Decimal) -> Decimal {
    let mut price = price;
    price.rescale(PRICE_SCALE);
    price
}

/// A catalog product.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    /// Database id; `None` until the product has been created
    pub id: Option<i32>,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price
    pub price: Decimal,
    /// Whether the product can be ordered
    pub available: bool,
    /// Catalog category
    pub category: Category,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            price: Decimal::ZERO,
            available: true,
            category: Category::Unknown,
        }
    }
}

impl From<product::Model> for Product {
    fn from(model: product::Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            price: to_price_scale(model.price),
            available: model.available,
            category: model.category,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{id}]>", self.name),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}

impl Product {
    /// Builds an unsaved product.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        available: bool,
        category: Category,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            available,
            category,
        }
    }

    fn active_model(&self) -> product::ActiveModel {
        product::ActiveModel {
            id: NotSet,
            name: Set(self.name.clone()),
            description: Set(self.description.clone()),
            price: Set(self.price),
            available: Set(self.available),
            category: Set(self.category),
        }
    }

    fn require_id(&self, action: &str) -> Result<i32> {
        self.id
            .ok_or_else(|| Error::validation(format!("{action} called with empty ID field")))
    }

    /// Inserts this product as a new row and stores the generated id.
    ///
    /// Any id already set on the instance is ignored; the database always assigns it.
    ///
    /// # Errors
    /// Returns an error if the insert violates a table constraint or the database fails.
    #[instrument(skip(self, db), fields(name = %self.name))]
    pub async fn create<C>(&mut self, db: &C) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let inserted = self.active_model().insert(db).await?;
        self.id = Some(inserted.id);
        info!("Created product '{}' (ID: {})", self.name, inserted.id);
        Ok(())
    }

    /// Writes the current field values to the row matching this product's id.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The product has no id
    /// - No row has that id
    /// - The database update fails
    #[instrument(skip(self, db), fields(id = ?self.id))]
    pub async fn update<C>(&self, db: &C) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let id = self.require_id("Update")?;

        let mut model = self.active_model();
        model.id = Unchanged(id);

        model.update(db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => Error::ProductNotFound { id },
            other => other.into(),
        })?;
        info!("Updated product '{}' (ID: {})", self.name, id);
        Ok(())
    }

    /// Removes the row matching this product's id.
    ///
    /// Deleting an id that has no row is not an error.
    ///
    /// # Errors
    /// Returns an error if the product has no id or the database delete fails.
    #[instrument(skip(self, db), fields(id = ?self.id))]
    pub async fn delete<C>(&self, db: &C) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let id = self.require_id("Delete")?;
        let result = ProductEntity::delete_by_id(id).exec(db).await?;
        info!(
            "Deleted product '{}' (ID: {}), {} row(s) removed",
            self.name, id, result.rows_affected
        );
        Ok(())
    }

    /// Returns every product in the database.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn all<C>(db: &C) -> Result<Vec<Self>>
    where
        C: ConnectionTrait,
    {
        debug!("Processing all products");
        ProductQuery::new(ProductEntity::find()).all(db).await
    }

    /// Finds a product by its id, returning `None` when no row has it.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn find<C>(db: &C, id: i32) -> Result<Option<Self>>
    where
        C: ConnectionTrait,
    {
        debug!("Processing lookup for id {id}");
        let found = ProductEntity::find_by_id(id).one(db).await?;
        Ok(found.map(Self::from))
    }

    /// Products whose name equals `name`.
    #[must_use]
    pub fn find_by_name(name: &str) -> ProductQuery {
        debug!("Processing name query for {name}");
        ProductQuery::filtered(product::Column::Name.eq(name))
    }

    /// Products whose availability equals `available`.
    #[must_use]
    pub fn find_by_availability(available: bool) -> ProductQuery {
        debug!("Processing available query for {available}");
        ProductQuery::filtered(product::Column::Available.eq(available))
    }

    /// Products in `category`.
    #[must_use]
    pub fn find_by_category(category: Category) -> ProductQuery {
        debug!("Processing category query for {category}");
        ProductQuery::filtered(product::Column::Category.eq(category))
    }

    /// Products whose price equals `price`.
    #[must_use]
    pub fn find_by_price(price: Decimal) -> ProductQuery {
        debug!("Processing price query for {price}");
        ProductQuery::filtered(product::Column::Price.eq(price))
    }

    /// Like [`Product::find_by_price`], parsing the price from text such as `"12.50"`.
    ///
    /// Surrounding spaces and double quotes are ignored.
    ///
    /// # Errors
    /// Returns [`Error::DataValidation`] if the text is not a decimal number.
    pub fn find_by_price_str(price: &str) -> Result<ProductQuery> {
        let parsed = parse_price(price)?;
        Ok(Self::find_by_price(parsed))
    }

    /// Serializes the product into a JSON object.
    #[must_use]
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "price": to_price_scale(self.price).to_string(),
            "available": self.available,
            "category": self.category.as_str(),
        })
    }

    /// Overwrites this product's fields from a JSON object.
    ///
    /// The id is left untouched. Fields are only assigned once every value has been
    /// validated, so a failed call leaves the product unchanged.
    ///
    /// # Errors
    /// Returns [`Error::DataValidation`] if a key is missing, `available` is not a
    /// boolean, the category is unknown, or the price is not a number.
    pub fn deserialize(&mut self, data: &Value) -> Result<()> {
        let object = data.as_object().ok_or_else(|| Error::validation(BAD_DATA))?;
        let field = |key: &str| {
            object
                .get(key)
                .ok_or_else(|| Error::validation(format!("Invalid product: missing {key}")))
        };

        let name = field("name")?
            .as_str()
            .ok_or_else(|| Error::validation(BAD_DATA))?
            .to_string();
        let description = field("description")?
            .as_str()
            .ok_or_else(|| Error::validation(BAD_DATA))?
            .to_string();

        let price = match field("price")? {
            Value::String(text) => parse_price(text)?,
            Value::Number(number) => Decimal::from_str(&number.to_string())
                .map_err(|_| Error::validation(BAD_DATA))?,
            _ => return Err(Error::validation(BAD_DATA)),
        };

        let available = match field("available")? {
            Value::Bool(flag) => *flag,
            other => {
                return Err(Error::validation(format!(
                    "Invalid type for boolean [available]: {}",
                    json_type_name(other)
                )));
            }
        };

        let category = match field("category")? {
            Value::String(text) => text.parse::<Category>()?,
            other => return Err(Error::validation(format!("Invalid attribute: {other}"))),
        };

        self.name = name;
        self.description = description;
        self.price = price;
        self.available = available;
        self.category = category;
        Ok(())
    }
}

fn parse_price(text: &str) -> Result<Decimal> {
    let trimmed = text.trim_matches(|c: char| c == ' ' || c == '"');
    Decimal::from_str(trimmed).map_err(|_| Error::validation(BAD_DATA))
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A lazily evaluated, filtered product query.
///
/// Building one does not touch the database; call [`ProductQuery::all`] or
/// [`ProductQuery::count`] to run it. Both can be called repeatedly.
#[derive(Clone, Debug)]
pub struct ProductQuery {
    select: Select<ProductEntity>,
}

impl ProductQuery {
    fn new(select: Select<ProductEntity>) -> Self {
        Self {
            select: select.order_by_asc(product::Column::Id),
        }
    }

    fn filtered(condition: SimpleExpr) -> Self {
        Self::new(ProductEntity::find().filter(condition))
    }

    /// Runs the query and collects the matching products.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn all<C>(&self, db: &C) -> Result<Vec<Product>>
    where
        C: ConnectionTrait,
    {
        let models = self.select.clone().all(db).await?;
        Ok(models.into_iter().map(Product::from).collect())
    }

    /// Counts the matching rows without loading them.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn count<C>(&self, db: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        self.select.clone().count(db).await.map_err(Into::into)
    }

    /// Returns the first matching product, if any.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn first<C>(&self, db: &C) -> Result<Option<Product>>
    where
        C: ConnectionTrait,
    {
        let found = self.select.clone().one(db).await?;
        Ok(found.map(Product::from))
    }
}
