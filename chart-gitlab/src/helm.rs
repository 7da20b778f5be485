/// Contains the image tag rewrite for a chart's values file.
pub mod values;
