pub type NumericData = f64;

pub type PlotPoint = (NumericData, NumericData);
