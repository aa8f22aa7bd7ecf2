//! Editorial content: blog posts, testimonials and FAQs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource::{flag_cell, opt_cell, Draft, Featurable, Resource};
use super::validation::{blank_to_none, require, require_range, ValidationError};
use crate::reorder::{Orderable, ReorderStrategy};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostInput {
    pub title: String,
    /// Derived from the title when left empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}

impl Draft for BlogPostInput {
    fn finalize(&mut self) -> Result<(), ValidationError> {
        blank_to_none(&mut self.excerpt);
        blank_to_none(&mut self.author);
        blank_to_none(&mut self.slug);
        require("title", &mut self.title)?;
        require("content", &mut self.content)?;
        let slug = match self.slug.take() {
            Some(given) => slug::slugify(given),
            None => slug::slugify(&self.title),
        };
        if slug.is_empty() {
            return Err(ValidationError::Required { field: "slug" });
        }
        self.slug = Some(slug);
        Ok(())
    }
}

impl Resource for BlogPost {
    type Id = i64;
    type Input = BlogPostInput;
    const PATH: &'static str = "blog-posts";
    const LABEL: &'static str = "blog post";
    const COLUMNS: &'static [&'static str] = &["id", "title", "slug", "author", "published", "featured"];

    fn id(&self) -> &i64 {
        &self.id
    }

    fn to_input(&self) -> BlogPostInput {
        BlogPostInput {
            title: self.title.clone(),
            slug: Some(self.slug.clone()),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            author: self.author.clone(),
            is_published: self.is_published,
        }
    }

    fn cell(&self, column: &str) -> Option<String> {
        match column {
            "id" => Some(self.id.to_string()),
            "title" => Some(self.title.clone()),
            "slug" => Some(self.slug.clone()),
            "author" => Some(opt_cell(self.author.as_ref())),
            "published" => Some(flag_cell(self.is_published)),
            "featured" => Some(flag_cell(self.is_featured)),
            _ => None,
        }
    }
}

impl Featurable for BlogPost {
    fn is_featured(&self) -> bool {
        self.is_featured
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub author_name: String,
    pub content: String,
    pub rating: u8,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_approved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialInput {
    pub author_name: String,
    pub content: String,
    pub rating: u8,
    #[serde(default)]
    pub is_approved: bool,
}

impl Draft for TestimonialInput {
    fn finalize(&mut self) -> Result<(), ValidationError> {
        require("author_name", &mut self.author_name)?;
        require("content", &mut self.content)?;
        require_range("rating", i64::from(self.rating), 1, 5)
    }
}

impl Resource for Testimonial {
    type Id = i64;
    type Input = TestimonialInput;
    const PATH: &'static str = "testimonials";
    const LABEL: &'static str = "testimonial";
    const COLUMNS: &'static [&'static str] = &["id", "author_name", "rating", "approved", "featured"];

    fn id(&self) -> &i64 {
        &self.id
    }

    fn to_input(&self) -> TestimonialInput {
        TestimonialInput {
            author_name: self.author_name.clone(),
            content: self.content.clone(),
            rating: self.rating,
            is_approved: self.is_approved,
        }
    }

    fn cell(&self, column: &str) -> Option<String> {
        match column {
            "id" => Some(self.id.to_string()),
            "author_name" => Some(self.author_name.clone()),
            "rating" => Some(self.rating.to_string()),
            "approved" => Some(flag_cell(self.is_approved)),
            "featured" => Some(flag_cell(self.is_featured)),
            _ => None,
        }
    }
}

impl Featurable for Testimonial {
    fn is_featured(&self) -> bool {
        self.is_featured
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: Option<String>,
    pub display_order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqInput {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u32>,
}

impl Draft for FaqInput {
    fn finalize(&mut self) -> Result<(), ValidationError> {
        blank_to_none(&mut self.category);
        require("question", &mut self.question)?;
        require("answer", &mut self.answer)
    }

    fn default_display_order(&mut self, next: u32) {
        self.display_order.get_or_insert(next);
    }
}

impl Resource for Faq {
    type Id = i64;
    type Input = FaqInput;
    const PATH: &'static str = "faqs";
    const LABEL: &'static str = "FAQ";
    const COLUMNS: &'static [&'static str] = &["id", "display_order", "question", "category"];

    fn id(&self) -> &i64 {
        &self.id
    }

    fn to_input(&self) -> FaqInput {
        FaqInput {
            question: self.question.clone(),
            answer: self.answer.clone(),
            category: self.category.clone(),
            display_order: None,
        }
    }

    fn cell(&self, column: &str) -> Option<String> {
        match column {
            "id" => Some(self.id.to_string()),
            "display_order" => Some(self.display_order.to_string()),
            "question" => Some(self.question.clone()),
            "category" => Some(opt_cell(self.category.as_ref())),
            _ => None,
        }
    }
}

impl Orderable for Faq {
    const STRATEGY: ReorderStrategy = ReorderStrategy::AdoptNeighbor;

    fn display_order(&self) -> u32 {
        self.display_order
    }
}
