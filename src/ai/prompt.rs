//! Construction of the analysis prompt sent to the narrative endpoint.

use crate::types::{CorrelationMatrix, DatasetSummary, MissingValueReport, OutlierReport};

/// System role message accompanying every narrative request.
pub const SYSTEM_PROMPT: &str = "You are a data analyst with expertise in dataset exploration.";

/// Build the user prompt from the four analysis outputs.
///
/// The template is fixed: five analytical sections (data quality,
/// descriptive statistics, correlations, visualizations, recommendations)
/// with the serialized analysis results embedded between them.
pub fn build_analysis_prompt(
    summary: &DatasetSummary,
    missing_values: &MissingValueReport,
    correlation_matrix: &CorrelationMatrix,
    outliers: &OutlierReport,
) -> String {
    format!(
        "You are a data analyst with expertise in exploratory data analysis (EDA). \
Given the following summary of a dataset, please provide a comprehensive analysis \
focusing on the following aspects:\n\
\n\
### 1. **Data Quality:**\n\
   - **Missing Values**: Identify columns with missing values, the share of missing \
data in each column, and any patterns in the missingness. Suggest methods to handle \
missing data, such as imputation or deletion.\n\
   - **Outliers**: Based on the descriptive statistics, identify columns with extreme \
values. Discuss how these might affect the analysis and suggest approaches for \
handling them (capping, transformation, or removal).\n\
   - **Data Types**: Check that the type of each column is appropriate for its \
values, and recommend corrections for any mismatches.\n\
\n\
### 2. **Dataset Summary (Descriptive Statistics):**\n\
   - **Overview**: Interpret the descriptive statistics for both numerical and \
categorical columns: central tendency, spread, skewed distributions, and the number \
and balance of unique values.\n\
   - **Statistical Insights**: Identify patterns that suggest relationships, trends, \
or areas worth further investigation.\n\
\n\
Dataset Summary (Descriptive Statistics):\n\
{summary}\n\
\n\
### 3. **Correlation Matrix:**\n\
   - **Variable Relationships**: Discuss strong positive or negative correlations \
between variables and whether they suggest multicollinearity or relationships that \
could influence modeling.\n\
   - **Unexpected Findings**: Point out surprising correlations or their absence.\n\
\n\
Correlation Matrix:\n\
{correlation}\n\
\n\
### 4. **Visualization Analysis:**\n\
Interpret the following visualizations in the context of the data:\n\
\n\
1. **Density Plot**: the distribution of the first numeric column - shape, skew, \
modality, and what that implies for statistical analysis or modeling.\n\
2. **Scatter Plot**: the relationship between the first two numeric columns - \
linear, nonlinear, clustered, or absent, and whether it aligns with the correlation \
matrix.\n\
3. **Histogram**: the distribution of all numeric columns - normality, skew, \
unusual peaks or gaps, and columns that may require transformation.\n\
\n\
Missing Values:\n\
{missing}\n\
\n\
### 5. **Recommendations for Further Exploration and Data Cleaning:**\n\
   - **Exploration**: Recommend further steps based on the summary, correlations, \
and visualizations.\n\
   - **Data Cleaning**: Suggest how to address the issues identified above.\n\
   - **Statistical Modeling**: Suggest modeling techniques or transformations that \
fit the relationships found.\n\
\n\
Please ensure that the analysis is detailed and provides actionable insights for \
improving data quality and preparing the dataset for more advanced analyses.\n\
\n\
Outliers:\n\
{outliers}\n",
        summary = summary,
        correlation = correlation_matrix,
        missing = missing_values,
        outliers = outliers,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnStats;

    fn fixture_inputs() -> (
        DatasetSummary,
        MissingValueReport,
        CorrelationMatrix,
        OutlierReport,
    ) {
        let summary = DatasetSummary {
            shape: (100, 2),
            columns: vec![ColumnStats {
                name: "age".to_string(),
                dtype: "Int64".to_string(),
                count: 100,
                mean: Some(35.5),
                std: Some(10.0),
                min: Some(18.0),
                q25: Some(27.0),
                median: Some(35.0),
                q75: Some(44.0),
                max: Some(70.0),
                unique_count: None,
                most_frequent: None,
            }],
        };
        let missing = MissingValueReport {
            counts: vec![("age".to_string(), 0), ("income".to_string(), 5)],
        };
        let matrix = CorrelationMatrix {
            labels: vec!["age".to_string()],
            values: vec![vec![Some(1.0)]],
        };
        let outliers = OutlierReport {
            counts: vec![("age".to_string(), 2)],
        };
        (summary, missing, matrix, outliers)
    }

    #[test]
    fn test_prompt_contains_all_five_sections() {
        let (summary, missing, matrix, outliers) = fixture_inputs();
        let prompt = build_analysis_prompt(&summary, &missing, &matrix, &outliers);

        assert!(prompt.contains("### 1. **Data Quality:**"));
        assert!(prompt.contains("### 2. **Dataset Summary (Descriptive Statistics):**"));
        assert!(prompt.contains("### 3. **Correlation Matrix:**"));
        assert!(prompt.contains("### 4. **Visualization Analysis:**"));
        assert!(prompt.contains("### 5. **Recommendations for Further Exploration"));
    }

    #[test]
    fn test_prompt_embeds_serialized_inputs() {
        let (summary, missing, matrix, outliers) = fixture_inputs();
        let prompt = build_analysis_prompt(&summary, &missing, &matrix, &outliers);

        // Summary line, missing counts, correlation row, outlier counts.
        assert!(prompt.contains("100 rows x 2 columns"));
        assert!(prompt.contains("income: 5"));
        assert!(prompt.contains("age: 1.0000"));
        assert!(prompt.contains("age: 2"));
    }
}
