use crate::statistics::enums::category::Category;
use crate::statistics::enums::multiple_category::MultipleCategory;
use crate::statistics::enums::normal_category::NormalCategory;
use std::fmt;
use std::str::FromStr;

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Normal(category) => category.as_str(),
            Category::Multiple(category) => category.as_str(),
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Category::Multiple(_))
    }
}

impl From<NormalCategory> for Category {
    fn from(category: NormalCategory) -> Self {
        Category::Normal(category)
    }
}

impl From<MultipleCategory> for Category {
    fn from(category: MultipleCategory) -> Self {
        Category::Multiple(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(category) = NormalCategory::from_str(s) {
            return Ok(Category::Normal(category));
        }
        MultipleCategory::from_str(s).map(Category::Multiple)
    }
}
