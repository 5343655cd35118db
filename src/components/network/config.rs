//! Host-supplied display copy for the network.
//!
//! The page may embed a JSON object in a
//! `<script id="network-config" type="application/json">` element. Missing
//! fields fall back to the built-in defaults.

use serde::Deserialize;

/// Text the animators and loader display.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
	/// Name shown on the loading overlay.
	pub owner_name: String,
	/// Subtitle shown under the name.
	pub owner_title: String,
	/// Labels handed out round-robin to background nodes.
	pub skills: Vec<String>,
	/// Tags attached to every background-node detail card.
	pub detail_tags: Vec<String>,
	/// Delay before the loading overlay clears, in milliseconds.
	pub loader_delay_ms: i32,
}

impl Default for NetworkConfig {
	fn default() -> Self {
		let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
		Self {
			owner_name: "Gaaurav Lath".to_string(),
			owner_title: "Data Scientist".to_string(),
			skills: strings(&[
				"Python",
				"SQL",
				"R",
				"JavaScript",
				"Pandas",
				"TensorFlow",
				"Keras",
				"Scikit-learn",
				"LangChain",
				"LangGraph",
				"Power BI",
				"Tableau",
				"Matplotlib",
				"Plotly",
				"AWS",
				"Apache Spark",
				"Databricks",
				"NoSQL",
				"CNN",
				"LSTM",
				"Transformers",
				"YOLO",
			]),
			detail_tags: strings(&["Data Science", "Technical"]),
			loader_delay_ms: 800,
		}
	}
}

impl NetworkConfig {
	/// Parse a config document.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}
